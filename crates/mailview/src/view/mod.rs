//! View components for the application.

mod detail;
mod header;
mod message_list;
mod sidebar;

pub use detail::view_detail;
pub use header::view_header;
pub use message_list::view_message_list;
pub use sidebar::view_sidebar;
