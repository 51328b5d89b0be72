//! The list widget's copy of the visible set.

use mailview_core::{Message as Mail, RenderSink};

/// Rows currently shown in the message list.
///
/// This is the render sink for the view controller: every render replaces
/// the rows wholesale, and the list view only ever draws from here.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    rows: Vec<Mail>,
}

impl MessageList {
    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Mail] {
        &self.rows
    }
}

impl RenderSink for MessageList {
    fn render(&mut self, visible: &[&Mail]) {
        self.rows = visible.iter().map(|&m| m.clone()).collect();
    }
}
