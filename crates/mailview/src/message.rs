//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use mailview_core::{Folder, MessageId, MessageStore};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Filters
    /// A folder was picked in the sidebar.
    SelectFolder(Folder),
    /// Search input changed.
    SearchChanged(String),
    /// Unread-only chip toggled.
    ToggleUnreadOnly,

    // Message list
    /// A message row was clicked.
    SelectMessage(MessageId),

    // Settings
    /// Switch between light and dark theme.
    ToggleTheme,
    /// Settings loaded at startup.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written to disk.
    SettingsSaved(Result<(), String>),

    // Startup
    /// Seed data loaded.
    SeedLoaded(Result<MessageStore, String>),
}
