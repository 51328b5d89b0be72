//! Application-side models.

mod list;
mod settings;

pub use list::MessageList;
pub use settings::{AppSettings, SeedSource, store_or_sample};
