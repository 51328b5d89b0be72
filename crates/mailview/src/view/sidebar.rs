//! Sidebar view component (folder list).

use iced::widget::{Column, button, column, container, row, text};
use iced::{Background, Border, Element, Length};

use mailview_core::{Folder, MessageStore};

use crate::message::Message;
use crate::style::{folder_button_style, palette, sidebar_style};

/// Renders the folder list with unread badges.
pub fn view_sidebar(store: &MessageStore, active: Folder) -> Element<'static, Message> {
    let header = container(text("FOLDERS").size(11).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    }))
    .padding([12, 16]);

    let items: Vec<Element<'static, Message>> = Folder::ALL
        .iter()
        .map(|&folder| view_folder_item(folder, folder == active, store.unread_count(folder)))
        .collect();

    let list = Column::with_children(items).spacing(2).padding([0, 8]);

    container(column![header, list])
        .width(Length::Fixed(200.0))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn folder_icon(folder: Folder) -> &'static str {
    match folder {
        Folder::Inbox => "\u{1F4E5}",
        Folder::Sent => "\u{1F4E4}",
        Folder::Drafts => "\u{1F4DD}",
        Folder::Spam => "\u{26A0}",
        Folder::Trash => "\u{1F5D1}",
    }
}

fn view_folder_item(folder: Folder, is_active: bool, unread: usize) -> Element<'static, Message> {
    let weight = if unread > 0 {
        iced::font::Weight::Semibold
    } else {
        iced::font::Weight::Normal
    };

    let name = text(folder.label()).size(14).font(iced::Font {
        weight,
        ..Default::default()
    });

    let mut content = row![text(folder_icon(folder)).size(16), name]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    if unread > 0 {
        let badge = container(text(unread.to_string()).size(11).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_on_primary),
            }
        }))
        .padding([2, 6])
        .style(|_theme| {
            let p = palette::current();
            container::Style {
                background: Some(Background::Color(p.primary)),
                border: Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

        content = content.push(iced::widget::Space::new().width(Length::Fill));
        content = content.push(badge);
    }

    button(content.width(Length::Fill))
        .width(Length::Fill)
        .padding([10, 12])
        .style(folder_button_style(is_active))
        .on_press(Message::SelectFolder(folder))
        .into()
}
