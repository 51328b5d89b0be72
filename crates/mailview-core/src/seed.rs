//! Seed data: the built-in sample set and JSON seed files.
//!
//! A seed file is a JSON array of message records:
//!
//! ```json
//! [
//!   {"id": 1, "sender": "John Doe", "subject": "Project Update",
//!    "preview": "Here are the latest updates...", "folder": "inbox",
//!    "unread": true, "date": "2025-11-10"}
//! ]
//! ```
//!
//! `unread` may be omitted and defaults to `true`.

use std::path::Path;

use tracing::warn;

use crate::{Folder, Message, MessageStore, Result};

/// Parses seed records from JSON text.
///
/// # Errors
///
/// Returns [`crate::Error::Seed`] if the text is not a valid seed.
pub fn parse_seed(json: &str) -> Result<Vec<Message>> {
    Ok(serde_json::from_str(json)?)
}

impl MessageStore {
    /// Builds a store from JSON seed text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown folder,
    /// or repeats a message id.
    pub fn from_json(json: &str) -> Result<Self> {
        let store = parse_seed(json).and_then(Self::from_seed);
        if let Err(ref e) = store {
            warn!("Rejected seed data: {e}");
        }
        store
    }

    /// Builds a store from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read, or any error
    /// from [`MessageStore::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Builds a store holding the built-in sample messages.
    #[must_use]
    pub fn sample() -> Self {
        // Sample ids are unique, so seeding cannot fail.
        Self::from_seed(sample_messages()).unwrap_or_default()
    }
}

/// The built-in six-message sample set.
#[must_use]
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(
            1,
            "John Doe",
            "Project Update",
            "Here are the latest updates on the project timeline and milestones...",
            Folder::Inbox,
            "2025-11-10",
            true,
        ),
        Message::new(
            2,
            "Alice Smith",
            "Meeting Schedule",
            "Can we schedule a meeting for next week to discuss the new features?",
            Folder::Inbox,
            "2025-11-09",
            true,
        ),
        Message::new(
            3,
            "Marketing Team",
            "Q4 Newsletter",
            "Please review the draft of our Q4 newsletter before we send it out...",
            Folder::Sent,
            "2025-11-08",
            false,
        ),
        Message::new(
            4,
            "Support System",
            "Your Account Security",
            "We noticed a login attempt from a new device...",
            Folder::Spam,
            "2025-11-07",
            true,
        ),
        Message::new(
            5,
            "David Wilson",
            "Holiday Party Planning",
            "Let's start planning for the annual holiday party...",
            Folder::Inbox,
            "2025-11-06",
            false,
        ),
        Message::new(
            6,
            "Sarah Johnson",
            "Code Review Request",
            "Could you please review my latest pull request when you have a moment?",
            Folder::Sent,
            "2025-11-05",
            false,
        ),
    ]
}
