//! Filter state and visible-set derivation.

use crate::{Folder, Message, MessageStore};

/// The three independent filter dimensions.
///
/// Always fully defined; the default shows every message in the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// The one active folder.
    pub folder: Folder,
    /// Free-text search, matched case-insensitively. Stored verbatim.
    pub search: String,
    /// Only show unread messages.
    pub unread_only: bool,
}

impl FilterState {
    /// Creates the default filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a message passes all three filters.
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        self.matches_folder(message)
            && matches_search(message, &self.search.to_lowercase())
            && self.matches_unread(message)
    }

    /// Folder predicate: exact equality, there is no "all folders" view.
    #[must_use]
    pub fn matches_folder(&self, message: &Message) -> bool {
        message.folder == self.folder
    }

    /// Search predicate. An empty search term matches every message.
    #[must_use]
    pub fn matches_search(&self, message: &Message) -> bool {
        matches_search(message, &self.search.to_lowercase())
    }

    /// Unread predicate.
    #[must_use]
    pub const fn matches_unread(&self, message: &Message) -> bool {
        !self.unread_only || message.unread
    }
}

/// Substring match of an already-lowercased needle against subject, sender
/// and preview.
fn matches_search(message: &Message, needle: &str) -> bool {
    needle.is_empty()
        || [&message.subject, &message.sender, &message.preview]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Derives the visible set from scratch.
///
/// The result is the subsequence of `store.all()` that passes `filter`, in
/// seed order. No sorting is applied.
#[must_use]
pub fn derive<'a>(store: &'a MessageStore, filter: &FilterState) -> Vec<&'a Message> {
    let needle = filter.search.to_lowercase();
    store
        .all()
        .iter()
        .filter(|m| {
            filter.matches_folder(m) && matches_search(m, &needle) && filter.matches_unread(m)
        })
        .collect()
}
