//! Property tests for the todo store's state transitions.

use composable_todo_testing::{SequentialIdGenerator, properties};
use proptest::prelude::*;
use std::sync::Arc;
use todo::{TodoEnvironment, TodoId, TodoStore};

fn store_with(texts: &[String]) -> TodoStore {
    let mut store =
        TodoStore::with_environment(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())));
    for text in texts {
        store.add(text);
    }
    store
}

fn ids(store: &TodoStore) -> Vec<TodoId> {
    store.list().iter().map(|t| t.id).collect()
}

proptest! {
    #[test]
    fn add_appends_exactly_one_trimmed_pending_todo(
        existing in properties::text_batch(8),
        text in properties::non_blank_text(),
    ) {
        let mut store = store_with(&existing);
        let before = store.list().to_vec();

        store.add(&text);

        prop_assert_eq!(store.len(), before.len() + 1);
        prop_assert_eq!(&store.list()[..before.len()], &before[..]);
        let last = &store.list()[before.len()];
        prop_assert_eq!(last.text.as_str(), text.trim());
        prop_assert!(!last.is_completed);
    }

    #[test]
    fn add_blank_is_noop(
        existing in properties::text_batch(8),
        text in properties::blank_text(),
    ) {
        let mut store = store_with(&existing);
        let before = store.state().clone();

        store.add(&text);

        prop_assert_eq!(store.state(), &before);
    }

    #[test]
    fn stored_todos_are_never_blank_and_ids_unique(texts in properties::text_batch(16)) {
        let store = store_with(&texts);

        prop_assert!(store.list().iter().all(|t| !t.text.trim().is_empty()));
        prop_assert!(store.list().iter().all(|t| t.text == t.text.trim()));

        let mut sorted = ids(&store);
        sorted.sort_by_key(|id| *id.as_uuid());
        sorted.dedup();
        prop_assert_eq!(sorted.len(), store.len());
    }

    #[test]
    fn toggle_flips_only_target_and_is_involution(
        texts in prop::collection::vec(properties::non_blank_text(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_with(&texts);
        let before = store.list().to_vec();
        let target = pick.index(before.len());
        let id = before[target].id;

        store.toggle(&id);
        for (n, (after, original)) in store.list().iter().zip(&before).enumerate() {
            prop_assert_eq!(after.id, original.id);
            prop_assert_eq!(&after.text, &original.text);
            if n == target {
                prop_assert_eq!(after.is_completed, !original.is_completed);
            } else {
                prop_assert_eq!(after.is_completed, original.is_completed);
            }
        }

        store.toggle(&id);
        prop_assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn remove_drops_exactly_target_and_keeps_order(
        texts in prop::collection::vec(properties::non_blank_text(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_with(&texts);
        let mut expected = ids(&store);
        let id = expected.remove(pick.index(expected.len()));

        store.remove(&id);

        prop_assert_eq!(ids(&store), expected);
        prop_assert!(store.get(&id).is_none());
    }

    #[test]
    fn unknown_ids_are_noops(texts in properties::text_batch(8), n in 1_000u64..2_000) {
        let mut store = store_with(&texts);
        let before = store.state().clone();
        let stranger = TodoId::from_uuid(SequentialIdGenerator::nth(n));

        store.toggle(&stranger);
        store.remove(&stranger);

        prop_assert_eq!(store.state(), &before);
    }

    #[test]
    fn active_count_matches_incomplete_todos(
        texts in properties::text_batch(12),
        toggles in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let mut store = store_with(&texts);
        if !store.is_empty() {
            for pick in toggles {
                let id = store.list()[pick.index(store.len())].id;
                store.toggle(&id);
            }
        }

        let incomplete = store.list().iter().filter(|t| !t.is_completed).count();
        prop_assert_eq!(store.active_count(), incomplete);
        prop_assert_eq!(store.active_count() + store.completed_count(), store.len());
    }
}
