//! View controller: owns filter state and keeps a rendered list in sync.
//!
//! Every successful operation runs to completion in three steps: mutate
//! state, derive the visible set from scratch, hand the full set to the
//! [`RenderSink`]. Nothing is patched incrementally, so the rendered list is
//! always `derive(store, filter)`.

use tracing::{debug, warn};

use crate::filter::{FilterState, derive};
use crate::{Folder, Message, MessageId, MessageStore, Result};

/// Receives the full visible set after every state change.
///
/// Each call replaces whatever was displayed before.
pub trait RenderSink {
    /// Display `visible`, in order, replacing the previous list.
    fn render(&mut self, visible: &[&Message]);
}

impl<F> RenderSink for F
where
    F: FnMut(&[&Message]),
{
    fn render(&mut self, visible: &[&Message]) {
        self(visible);
    }
}

/// Input events produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A folder was picked; carries the folder name.
    FolderSelected(String),
    /// The search box changed.
    SearchChanged(String),
    /// The unread-only checkbox changed.
    UnreadOnlyChanged(bool),
    /// A message in the list was clicked.
    MessageClicked(MessageId),
}

/// Single owner of the message store, the filter state and the render sink.
#[derive(Debug)]
pub struct ViewController<R: RenderSink> {
    store: MessageStore,
    filter: FilterState,
    selected: Option<MessageId>,
    sink: R,
}

impl<R: RenderSink> ViewController<R> {
    /// Creates a controller with the default filter and renders once.
    pub fn new(store: MessageStore, sink: R) -> Self {
        Self::with_filter(store, FilterState::default(), sink)
    }

    /// Creates a controller with an initial filter and renders once.
    pub fn with_filter(store: MessageStore, filter: FilterState, sink: R) -> Self {
        let mut controller = Self {
            store,
            filter,
            selected: None,
            sink,
        };
        controller.refresh();
        controller
    }

    /// The underlying message store.
    #[must_use]
    pub const fn store(&self) -> &MessageStore {
        &self.store
    }

    /// The current filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The selected message, if it is still visible.
    #[must_use]
    pub const fn selected(&self) -> Option<MessageId> {
        self.selected
    }

    /// The render sink.
    #[must_use]
    pub const fn sink(&self) -> &R {
        &self.sink
    }

    /// Switches the active folder.
    pub fn set_folder(&mut self, folder: Folder) {
        debug!(%folder, "Folder changed");
        self.filter.folder = folder;
        self.refresh();
    }

    /// Switches the active folder by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFolder`] for an unknown name. The
    /// filter and the rendered list keep their previous state.
    pub fn set_folder_name(&mut self, name: &str) -> Result<()> {
        match Folder::parse(name) {
            Ok(folder) => {
                self.set_folder(folder);
                Ok(())
            }
            Err(e) => {
                warn!(name, "Rejected folder change: {e}");
                Err(e)
            }
        }
    }

    /// Replaces the search term verbatim.
    pub fn set_search_term(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        debug!(search = %self.filter.search, "Search changed");
        self.refresh();
    }

    /// Toggles the unread-only filter.
    pub fn set_unread_only(&mut self, unread_only: bool) {
        debug!(unread_only, "Unread filter changed");
        self.filter.unread_only = unread_only;
        self.refresh();
    }

    /// Selects a message, marking it read if it was unread.
    ///
    /// Unknown ids leave the store and selection untouched.
    pub fn select_message(&mut self, id: MessageId) {
        if self.store.get(id).is_some() {
            self.store.mark_read(id);
            self.selected = Some(id);
        } else {
            debug!(%id, "Selection of unknown message ignored");
        }
        self.refresh();
    }

    /// Applies one input event.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFolder`] if a folder event names an
    /// unknown folder.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::FolderSelected(name) => return self.set_folder_name(&name),
            Event::SearchChanged(search) => self.set_search_term(search),
            Event::UnreadOnlyChanged(unread_only) => self.set_unread_only(unread_only),
            Event::MessageClicked(id) => self.select_message(id),
        }
        Ok(())
    }

    /// The current visible set, derived from scratch.
    #[must_use]
    pub fn visible_messages(&self) -> Vec<&Message> {
        derive(&self.store, &self.filter)
    }

    /// Re-derives the visible set and pushes it to the sink.
    fn refresh(&mut self) {
        let visible = derive(&self.store, &self.filter);
        if let Some(id) = self.selected
            && !visible.iter().any(|m| m.id == id)
        {
            self.selected = None;
        }
        debug!(
            folder = %self.filter.folder,
            visible = visible.len(),
            "Visible set derived"
        );
        self.sink.render(&visible);
    }
}
