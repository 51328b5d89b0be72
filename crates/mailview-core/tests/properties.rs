//! Property tests for the derivation rules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mailview_core::{FilterState, Folder, Message, MessageId, MessageStore, ViewController, derive};
use proptest::prelude::*;

fn folder_strategy() -> impl Strategy<Value = Folder> {
    prop::sample::select(Folder::ALL.to_vec())
}

/// Short lowercase/uppercase words so that searches actually hit.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C ]{0,8}"
}

fn store_strategy() -> impl Strategy<Value = MessageStore> {
    prop::collection::vec(
        (
            text_strategy(),
            text_strategy(),
            text_strategy(),
            folder_strategy(),
            any::<bool>(),
        ),
        0..24,
    )
    .prop_map(|records| {
        let messages = records
            .into_iter()
            .enumerate()
            .map(|(i, (sender, subject, preview, folder, unread))| {
                let id = u32::try_from(i).unwrap_or(u32::MAX);
                Message::new(id, sender, subject, preview, folder, "2025-01-01", unread)
            })
            .collect();
        MessageStore::from_seed(messages).unwrap()
    })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (folder_strategy(), "[a-cA-C]{0,3}", any::<bool>()).prop_map(|(folder, search, unread_only)| {
        FilterState {
            folder,
            search,
            unread_only,
        }
    })
}

fn ids(messages: &[&Message]) -> Vec<MessageId> {
    messages.iter().map(|m| m.id).collect()
}

proptest! {
    #[test]
    fn prop_derive_is_deterministic(store in store_strategy(), filter in filter_strategy()) {
        let snapshot = store.all().to_vec();
        let first = ids(&derive(&store, &filter));
        let second = ids(&derive(&store, &filter));
        prop_assert_eq!(first, second);
        prop_assert_eq!(store.all(), snapshot.as_slice());
    }

    #[test]
    fn prop_visible_iff_all_predicates(store in store_strategy(), filter in filter_strategy()) {
        let visible = ids(&derive(&store, &filter));
        for message in store.all() {
            let needle = filter.search.to_lowercase();
            let in_folder = message.folder == filter.folder;
            let found = needle.is_empty()
                || [&message.subject, &message.sender, &message.preview]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
            let unread_ok = !filter.unread_only || message.is_unread();
            let expected = in_folder && found && unread_ok;
            prop_assert_eq!(visible.contains(&message.id), expected);
        }
    }

    #[test]
    fn prop_empty_search_matches_everything(store in store_strategy(), folder in folder_strategy()) {
        let filter = FilterState { folder, search: String::new(), unread_only: false };
        let visible = ids(&derive(&store, &filter));
        let in_folder: Vec<MessageId> = store
            .all()
            .iter()
            .filter(|m| m.folder == folder)
            .map(|m| m.id)
            .collect();
        prop_assert_eq!(visible, in_folder);
    }

    #[test]
    fn prop_visible_is_subsequence_of_seed(store in store_strategy(), filter in filter_strategy()) {
        let visible = ids(&derive(&store, &filter));
        let seed: Vec<MessageId> = store.all().iter().map(|m| m.id).collect();
        let mut cursor = seed.iter();
        for id in &visible {
            prop_assert!(cursor.any(|s| s == id));
        }
    }

    #[test]
    fn prop_read_is_monotonic(
        store in store_strategy(),
        picks in prop::collection::vec(0u32..30, 0..16),
        filters in prop::collection::vec(filter_strategy(), 0..8),
    ) {
        let mut view = ViewController::new(store, |_: &[&Message]| {});
        let mut read: Vec<MessageId> = Vec::new();

        for (step, pick) in picks.iter().enumerate() {
            let id = MessageId(*pick);
            view.select_message(id);
            if view.store().get(id).is_some() {
                read.push(id);
            }
            if let Some(filter) = filters.get(step) {
                view.set_folder(filter.folder);
                view.set_search_term(filter.search.clone());
                view.set_unread_only(filter.unread_only);
            }
            for id in &read {
                prop_assert!(!view.store().get(*id).unwrap().is_unread());
            }
        }
    }
}
