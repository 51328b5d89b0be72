//! Canonical in-memory message store.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::{Error, Folder, Message, MessageId, Result};

/// Owns every message and its read state.
///
/// Messages keep the order they were seeded in. There is no way to add or
/// remove a message after construction; the only mutation is marking a
/// message read.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    index: HashMap<MessageId, usize>,
}

impl MessageStore {
    /// Builds a store from seed records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMessageId`] if two records share an id.
    pub fn from_seed(messages: Vec<Message>) -> Result<Self> {
        let mut index = HashMap::with_capacity(messages.len());
        for (position, message) in messages.iter().enumerate() {
            if index.insert(message.id, position).is_some() {
                return Err(Error::DuplicateMessageId(message.id));
            }
        }
        debug!(count = messages.len(), "Message store seeded");
        Ok(Self { messages, index })
    }

    /// All messages in seed order, regardless of any filter.
    #[must_use]
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Looks up a message by id.
    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.index.get(&id).map(|&position| &self.messages[position])
    }

    /// Marks a message read.
    ///
    /// Returns `true` only if the message existed and was unread. Unknown ids
    /// and already-read messages are left alone.
    pub fn mark_read(&mut self, id: MessageId) -> bool {
        let Some(&position) = self.index.get(&id) else {
            debug!(%id, "mark_read on unknown message ignored");
            return false;
        };
        let message = &mut self.messages[position];
        if !message.unread {
            return false;
        }
        message.unread = false;
        info!(%id, "Message marked read");
        true
    }

    /// Number of unread messages in a folder.
    #[must_use]
    pub fn unread_count(&self, folder: Folder) -> usize {
        self.messages
            .iter()
            .filter(|m| m.folder == folder && m.unread)
            .count()
    }

    /// Number of messages in the store.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store holds no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::seed::sample_messages;

    fn sample_store() -> MessageStore {
        MessageStore::from_seed(sample_messages()).unwrap()
    }

    #[test]
    fn test_all_preserves_seed_order() {
        let store = sample_store();
        let ids: Vec<u32> = store.all().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_seed_rejects_duplicate_ids() {
        let mut messages = sample_messages();
        messages.push(Message::new(3, "X", "Y", "Z", Folder::Inbox, "", true));
        let err = MessageStore::from_seed(messages).unwrap_err();
        assert!(matches!(err, Error::DuplicateMessageId(MessageId(3))));
    }

    #[test]
    fn test_mark_read_transitions_once() {
        let mut store = sample_store();
        assert!(store.get(MessageId(1)).unwrap().is_unread());

        assert!(store.mark_read(MessageId(1)));
        assert!(!store.get(MessageId(1)).unwrap().is_unread());

        // Second call is a no-op
        assert!(!store.mark_read(MessageId(1)));
        assert!(!store.get(MessageId(1)).unwrap().is_unread());
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let mut store = sample_store();
        let before = store.all().to_vec();
        assert!(!store.mark_read(MessageId(999)));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_mark_read_already_read_is_noop() {
        let mut store = sample_store();
        assert!(!store.get(MessageId(3)).unwrap().is_unread());
        assert!(!store.mark_read(MessageId(3)));
    }

    #[test]
    fn test_unread_count() {
        let mut store = sample_store();
        assert_eq!(store.unread_count(Folder::Inbox), 2);
        assert_eq!(store.unread_count(Folder::Spam), 1);
        assert_eq!(store.unread_count(Folder::Sent), 0);

        store.mark_read(MessageId(2));
        assert_eq!(store.unread_count(Folder::Inbox), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = MessageStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(MessageId(1)).is_none());
    }
}
