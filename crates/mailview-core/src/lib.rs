//! # mailview-core
//!
//! Filtering and view-state engine for the `MailView` client.
//!
//! This crate provides:
//! - **Message store** - the seeded messages and their read state
//! - **Filter state** - folder, search text and unread-only filters
//! - **Derivation** - the pure function from store and filter to the visible list
//! - **View controller** - applies input events and re-renders after each one
//! - **Seed loading** - the built-in sample set and JSON seed files
//!
//! # Example
//!
//! ```
//! use mailview_core::{Folder, Message, MessageStore, ViewController};
//!
//! let mut shown = Vec::new();
//! let mut view = ViewController::new(MessageStore::sample(), |visible: &[&Message]| {
//!     shown = visible.iter().map(|m| m.id.0).collect();
//! });
//! view.set_folder(Folder::Spam);
//! drop(view);
//! assert_eq!(shown, vec![4]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod filter;
mod message;
pub mod seed;
mod store;
pub mod view;

pub use error::{Error, Result};
pub use filter::{FilterState, derive};
pub use message::{Folder, Message, MessageId};
pub use seed::{parse_seed, sample_messages};
pub use store::MessageStore;
pub use view::{Event, RenderSink, ViewController};
