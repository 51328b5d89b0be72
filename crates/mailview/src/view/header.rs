//! Header/toolbar: title, search box and filter chips.

use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::palette::{self, ThemeMode};
use crate::style::{chip_style, header_style, search_input_style};

/// Renders the application header.
pub fn view_header(
    search: &str,
    unread_only: bool,
    theme_mode: ThemeMode,
    source_label: &str,
) -> Element<'static, Message> {
    let title = text("MailView")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let source = text(source_label.to_string()).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    });

    let search = text_input("Search messages...", search)
        .width(Length::Fixed(280.0))
        .padding([10, 16])
        .style(search_input_style)
        .on_input(Message::SearchChanged);

    let unread_chip = button(text("Unread only").size(12))
        .padding([6, 12])
        .style(chip_style(unread_only))
        .on_press(Message::ToggleUnreadOnly);

    let theme_label = match theme_mode {
        ThemeMode::Light => "\u{263E}", // moon
        ThemeMode::Dark => "\u{2600}",  // sun
    };
    let theme_btn = button(text(theme_label).size(14))
        .padding([6, 12])
        .style(chip_style(false))
        .on_press(Message::ToggleTheme);

    let content = row![
        title,
        source,
        iced::widget::Space::new().width(Length::Fill),
        search,
        unread_chip,
        theme_btn,
    ]
    .spacing(12)
    .padding([12, 20])
    .align_y(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}
