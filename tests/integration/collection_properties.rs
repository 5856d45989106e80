//! Property tests for the collection labs

use labs_collections::{GenericHolder, MapLab, QueueLab, SetLab};
use proptest::prelude::*;

proptest! {
    #[test]
    fn holder_returns_value_unchanged(value in any::<String>()) {
        let mut holder = GenericHolder::new();
        holder.load(value.clone());
        prop_assert_eq!(holder.get(), Some(&value));
    }

    #[test]
    fn map_insert_new_key_grows_by_one(
        keys in prop::collection::hash_set(any::<i32>(), 0..16),
        key in any::<i32>(),
        value in "[a-z]{1,8}",
    ) {
        prop_assume!(!keys.contains(&key));
        let mut map = MapLab::new();
        for k in &keys {
            map.add(*k, "seed");
        }

        let before = map.len();
        map.add(key, value.clone());
        prop_assert_eq!(map.len(), before + 1);
        prop_assert_eq!(map.get(key), Some(value.as_str()));
    }

    #[test]
    fn map_remove_present_key_shrinks_by_one(
        keys in prop::collection::hash_set(any::<i32>(), 1..16),
    ) {
        let mut map = MapLab::new();
        for k in &keys {
            map.add(*k, k.to_string());
        }

        for k in &keys {
            let before = map.len();
            prop_assert_eq!(map.remove(*k), Some(k.to_string()));
            prop_assert_eq!(map.len(), before - 1);
            prop_assert_eq!(map.get(*k), None);
        }
        prop_assert!(map.is_empty());
    }

    #[test]
    fn set_readding_never_grows(items in prop::collection::vec(any::<i32>(), 1..32)) {
        let mut set: SetLab = items.iter().copied().collect();
        let size = set.len();

        for item in &items {
            prop_assert!(!set.add(*item));
            prop_assert_eq!(set.len(), size);
        }
    }

    #[test]
    fn queue_is_fifo_and_peek_is_pure(items in prop::collection::vec("[a-z ]{0,6}", 0..24)) {
        let mut queue = QueueLab::new();
        for item in &items {
            queue.enqueue(item.as_str());
        }

        for item in &items {
            let size = queue.len();
            prop_assert_eq!(queue.peek(), Some(item.as_str()));
            prop_assert_eq!(queue.len(), size);
            let front = queue.dequeue();
            prop_assert_eq!(front.as_deref(), Some(item.as_str()));
        }
        prop_assert!(queue.is_empty());
        prop_assert_eq!(queue.peek(), None);
    }
}
