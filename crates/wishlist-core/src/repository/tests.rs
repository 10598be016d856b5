//! Repository Integration Tests
//!
//! ItemStore over a real file slot, reopened between sessions.

#[cfg(test)]
mod tests {
    use crate::clock::SystemClock;
    use crate::domain::{ItemDraft, Priority};
    use crate::repository::{FileSlot, ItemStore, LoadStatus, StorageAdapter};
    use std::path::Path;

    fn open(dir: &Path) -> (ItemStore<FileSlot, SystemClock>, LoadStatus) {
        ItemStore::open(StorageAdapter::new(FileSlot::new(dir), "WISHLIST"), SystemClock, 2)
    }

    #[test]
    fn test_items_survive_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let (mut store, status) = open(dir.path());
        assert_eq!(status, LoadStatus::Fresh);
        let laptop = store
            .create(ItemDraft::named("Laptop").price(15_000_000.0).priority(Priority::High))
            .unwrap();
        let buku = store.create(ItemDraft::named("Buku").price(50_000.0)).unwrap();
        let buku = store.toggle_bought(buku.id).unwrap();
        drop(store);

        let (store, status) = open(dir.path());
        assert_eq!(status, LoadStatus::Restored(2));
        assert_eq!(store.items(), &[buku, laptop][..]);
    }

    #[test]
    fn test_deleting_everything_is_not_fresh() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let (mut store, _) = open(dir.path());
        let item = store.create(ItemDraft::named("Headphone")).unwrap();
        store.delete(item.id).unwrap();
        drop(store);

        let (store, status) = open(dir.path());
        assert_eq!(status, LoadStatus::Restored(0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_stay_above_persisted_ones() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let (mut store, _) = open(dir.path());
        let first = store.create(ItemDraft::named("Headphone")).unwrap();
        drop(store);

        let (mut store, _) = open(dir.path());
        let second = store.create(ItemDraft::named("Keyboard")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_corrupt_file_recovers_and_is_overwritten() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("WISHLIST.json"), "[{broken").unwrap();

        let (mut store, status) = open(dir.path());
        assert!(matches!(status, LoadStatus::Recovered(_)));
        store.create(ItemDraft::named("Headphone")).unwrap();
        drop(store);

        let (store, status) = open(dir.path());
        assert_eq!(status, LoadStatus::Restored(1));
        assert_eq!(store.items()[0].name, "Headphone");
        let backup = std::fs::read_to_string(dir.path().join("WISHLIST.bak.json")).unwrap();
        assert_eq!(backup, "[{broken");
    }

    #[test]
    fn test_legacy_duplicate_ids_are_reassigned() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let legacy = r#"[
            {"id":1700000000000,"name":"Laptop","price":15000000,"bought":false,
             "createdAt":"2023-11-14T22:13:20.000Z","updatedAt":"2023-11-14T22:13:20.000Z"},
            {"id":1700000000000,"name":"Buku","price":null,"bought":false,
             "createdAt":"2023-11-14T22:13:20.000Z","updatedAt":"2023-11-14T22:00:00.000Z"}
        ]"#;
        std::fs::write(dir.path().join("WISHLIST.json"), legacy).unwrap();

        let (mut store, status) = open(dir.path());
        assert_eq!(status, LoadStatus::Restored(2));
        let laptop = store.items()[0].clone();
        let buku = store.items()[1].clone();
        assert_eq!(laptop.id, 1_700_000_000_000);
        assert_ne!(buku.id, laptop.id);
        assert_eq!(buku.price, 0.0);
        assert_eq!(buku.updated_at, buku.created_at);

        assert!(store.toggle_bought(laptop.id).unwrap().bought);
        assert!(store.toggle_bought(buku.id).unwrap().bought);
        drop(store);

        let (store, _) = open(dir.path());
        let persisted: Vec<_> = store.items().iter().map(|item| (item.id, item.bought)).collect();
        assert_eq!(persisted, vec![(laptop.id, true), (buku.id, true)]);
    }

    #[test]
    fn test_repairs_are_saved_without_further_edits() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let legacy = r#"[
            {"id":5,"name":"Pena","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            {"id":5,"name":"Tas","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
        ]"#;
        std::fs::write(dir.path().join("WISHLIST.json"), legacy).unwrap();

        let (first, _) = open(dir.path());
        let ids: Vec<_> = first.items().iter().map(|item| item.id).collect();
        drop(first);

        let (second, _) = open(dir.path());
        let reopened: Vec<_> = second.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, reopened);
        assert_ne!(reopened[0], reopened[1]);
    }
}
