//! Container, button and input style functions.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow};

use super::palette;

const RADIUS: f32 = 6.0;

/// Header bar style.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Folder sidebar style.
pub fn sidebar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Message list panel style.
pub fn list_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Detail pane style.
pub fn detail_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        ..Default::default()
    }
}

/// Folder button; the active folder gets an accent border.
pub fn folder_button_style(
    is_active: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();

        let (background, text_color, border_color) = if is_active {
            (p.selected, p.primary, p.primary)
        } else {
            match status {
                button::Status::Hovered => (p.hover, p.text_primary, p.border_subtle),
                button::Status::Pressed => (p.selected, p.text_primary, Color::TRANSPARENT),
                _ => (Color::TRANSPARENT, p.text_primary, Color::TRANSPARENT),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: if is_active { 2.0 } else { 1.0 },
                radius: RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

/// Message row button; selected and unread rows are tinted.
pub fn row_button_style(
    is_selected: bool,
    is_unread: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();

        let background = match status {
            _ if is_selected => p.selected,
            button::Status::Hovered => p.hover,
            button::Status::Pressed => p.selected,
            _ if is_unread => p.background,
            _ => p.surface,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: p.text_primary,
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Toggle chip used for the unread-only filter and the theme switch.
pub fn chip_style(is_active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();
        let (bg, text_color, border_color) = if is_active {
            (p.primary, p.text_on_primary, p.primary)
        } else {
            match status {
                button::Status::Hovered => (p.hover, p.text_primary, p.border_medium),
                _ => (p.surface, p.text_secondary, p.border_subtle),
            }
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Search input style.
pub fn search_input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: RADIUS.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.selected,
    };

    match status {
        text_input::Status::Active | text_input::Status::Disabled => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: p.primary_light,
                ..base.border
            },
            ..base
        },
    }
}
