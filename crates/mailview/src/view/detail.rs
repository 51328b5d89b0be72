//! Detail pane for the selected message.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use mailview_core::Message as Mail;

use crate::message::Message;
use crate::style::{detail_style, palette};

/// Renders the selected message, or a placeholder when nothing is selected.
pub fn view_detail(mail: Option<&Mail>) -> Element<'static, Message> {
    let Some(mail) = mail else {
        return container(text("Select a message to read").size(16).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(detail_style)
        .into();
    };

    let subject = text(mail.subject.clone()).size(22).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });

    let meta = text(format!("{}  \u{00B7}  {}", mail.sender, mail.date))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    let body = text(mail.preview.clone()).size(15);

    container(column![subject, meta, body].spacing(12))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(detail_style)
        .into()
}
