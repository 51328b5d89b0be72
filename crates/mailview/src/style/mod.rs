//! Styling and theming for the application.

pub mod palette;
mod widgets;

pub use widgets::{
    chip_style, detail_style, folder_button_style, header_style, list_style, row_button_style,
    search_input_style, sidebar_style,
};
