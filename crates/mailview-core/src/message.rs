//! Message and folder data models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u32);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Folder a message belongs to.
///
/// Membership is exclusive and fixed for the lifetime of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Inbox.
    #[default]
    Inbox,
    /// Sent messages.
    Sent,
    /// Drafts.
    Drafts,
    /// Spam/Junk.
    Spam,
    /// Trash/Deleted.
    Trash,
}

impl Folder {
    /// Every known folder, in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Inbox,
        Self::Sent,
        Self::Drafts,
        Self::Spam,
        Self::Trash,
    ];

    /// Parse a folder name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFolder`] if the name is not a known folder.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "drafts" => Ok(Self::Drafts),
            "spam" => Ok(Self::Spam),
            "trash" => Ok(Self::Trash),
            _ => Err(Error::InvalidFolder(s.to_string())),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Folder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Folder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A single mail message.
///
/// Everything except the unread flag is fixed at creation. The flag only
/// ever moves from unread to read, through [`crate::MessageStore::mark_read`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Sender display name.
    pub sender: String,
    /// Message subject.
    pub subject: String,
    /// Short preview of message content.
    pub preview: String,
    /// Folder containing this message.
    pub folder: Folder,
    /// Message date as an opaque display string.
    pub date: String,
    #[serde(default = "default_unread")]
    pub(crate) unread: bool,
}

const fn default_unread() -> bool {
    true
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub fn new(
        id: u32,
        sender: impl Into<String>,
        subject: impl Into<String>,
        preview: impl Into<String>,
        folder: Folder,
        date: impl Into<String>,
        unread: bool,
    ) -> Self {
        Self {
            id: MessageId(id),
            sender: sender.into(),
            subject: subject.into(),
            preview: preview.into(),
            folder,
            date: date.into(),
            unread,
        }
    }

    /// Whether the message is still unread.
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        self.unread
    }
}
