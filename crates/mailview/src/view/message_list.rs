//! Message list view component.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Background, Border, Element, Length};

use mailview_core::{Message as Mail, MessageId};

use crate::message::Message;
use crate::style::{list_style, palette, row_button_style};

/// Renders the rows last handed to the list by the view controller.
pub fn view_message_list(rows: &[Mail], selected: Option<MessageId>) -> Element<'static, Message> {
    if rows.is_empty() {
        return container(
            column![
                text("\u{1F4ED}").size(48), // empty mailbox
                text("No messages").size(16).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.text_secondary),
                    }
                }),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fixed(420.0))
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(list_style)
        .into();
    }

    let items: Vec<Element<'static, Message>> = rows
        .iter()
        .map(|mail| view_row(mail, selected == Some(mail.id)))
        .collect();

    container(scrollable(Column::with_children(items)).height(Length::Fill))
        .width(Length::Fixed(420.0))
        .height(Length::Fill)
        .style(list_style)
        .into()
}

fn view_row(mail: &Mail, is_selected: bool) -> Element<'static, Message> {
    let unread = mail.is_unread();
    let weight = if unread {
        iced::font::Weight::Semibold
    } else {
        iced::font::Weight::Normal
    };

    let sender = text(mail.sender.clone()).size(14).font(iced::Font {
        weight,
        ..Default::default()
    });

    let date = text(mail.date.clone()).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    });

    let mut header = row![sender, iced::widget::Space::new().width(Length::Fill), date]
        .spacing(8)
        .align_y(iced::Alignment::Center);

    if unread {
        header = header.push(
            container(text("New").size(11).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_on_primary),
                }
            }))
            .padding([2, 8])
            .style(|_theme| {
                let p = palette::current();
                container::Style {
                    background: Some(Background::Color(p.unread)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }),
        );
    }

    let subject = text(mail.subject.clone()).size(13).font(iced::Font {
        weight,
        ..Default::default()
    });

    let preview = text(truncate(&mail.preview, 64)).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    button(column![header, subject, preview].spacing(4).padding([10, 14]))
        .width(Length::Fill)
        .padding(0)
        .style(row_button_style(is_selected, unread))
        .on_press(Message::SelectMessage(mail.id))
        .into()
}

/// Truncates a string to a maximum length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
