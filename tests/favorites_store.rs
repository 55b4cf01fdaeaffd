use proptest::prelude::*;
use reelmark::storage::{FavoritesStore, JsonStorage, MemoryStorage, Storage, Toggled, FAVORITES_SLOT};
use reelmark::MovieSummary;
use std::collections::HashSet;

fn movie(id: &str, title: &str) -> MovieSummary {
    MovieSummary::new(id, title, "2021", "movie")
}

fn stored_ids(storage: &MemoryStorage) -> Vec<String> {
    let blob = storage.slot(FAVORITES_SLOT).expect("favorites slot written");
    let movies: Vec<MovieSummary> = serde_json::from_str(&blob).expect("valid favorites blob");
    movies.into_iter().map(|m| m.id).collect()
}

#[test]
fn add_persists_and_ignores_duplicates() {
    let storage = MemoryStorage::default();
    let mut store = FavoritesStore::initialize(Box::new(storage.clone()));

    assert!(store.add(movie("tt1160419", "Dune")));
    assert!(store.add(movie("tt2543164", "Arrival")));
    assert!(!store.add(movie("tt1160419", "Dune (again)")));

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("tt1160419").map(|m| m.title.as_str()), Some("Dune"));
    assert_eq!(stored_ids(&storage), ["tt1160419", "tt2543164"]);
    assert_eq!(storage.writes(), 2);
}

#[test]
fn remove_of_unknown_id_does_not_write() {
    let storage = MemoryStorage::default();
    let mut store = FavoritesStore::initialize(Box::new(storage.clone()));
    store.add(movie("tt1", "Alien"));

    assert!(!store.remove("tt404"));
    assert_eq!(storage.writes(), 1);

    assert!(store.remove("tt1"));
    assert!(store.is_empty());
    assert_eq!(storage.writes(), 2);
    assert!(stored_ids(&storage).is_empty());
}

#[test]
fn toggle_flips_membership() {
    let mut store = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
    let dune = movie("tt1160419", "Dune");

    assert_eq!(store.toggle(dune.clone()), Toggled::Added);
    assert!(store.is_favorite("tt1160419"));
    assert_eq!(store.toggle(dune), Toggled::Removed);
    assert!(!store.is_favorite("tt1160419"));
}

#[test]
fn insertion_order_is_kept_after_removal() {
    let mut store = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
    store.add(movie("a", "Alien"));
    store.add(movie("b", "Blade Runner"));
    store.add(movie("c", "Contact"));
    store.remove("b");
    store.add(movie("b", "Blade Runner"));

    let ids: Vec<&str> = store.favorites().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["a", "c", "b"]);
}

#[test]
fn loads_previously_stored_blob() {
    let blob = r#"[
        {"imdbID":"tt1160419","Title":"Dune","Year":"2021","Poster":"N/A","Type":"movie"},
        {"imdbID":"tt2543164","Title":"Arrival","Year":"2016","Poster":"https://img/a.jpg","Type":"movie"}
    ]"#;
    let storage = MemoryStorage::default().with_slot(FAVORITES_SLOT, blob);
    let store = FavoritesStore::initialize(Box::new(storage));

    assert_eq!(store.len(), 2);
    assert!(store.get("tt1160419").is_some_and(|m| m.poster.is_none()));
    assert_eq!(
        store.get("tt2543164").and_then(|m| m.poster.as_deref()),
        Some("https://img/a.jpg")
    );
}

#[test]
fn stored_duplicates_collapse_to_first() {
    let blob = r#"[
        {"imdbID":"tt1","Title":"First","Year":"2000","Type":"movie"},
        {"imdbID":"tt1","Title":"Second","Year":"2000","Type":"movie"}
    ]"#;
    let storage = MemoryStorage::default().with_slot(FAVORITES_SLOT, blob);
    let store = FavoritesStore::initialize(Box::new(storage));

    assert_eq!(store.len(), 1);
    assert_eq!(store.favorites()[0].title, "First");
}

#[test]
fn malformed_blob_starts_empty() {
    let storage = MemoryStorage::default().with_slot(FAVORITES_SLOT, "{not json");
    let mut store = FavoritesStore::initialize(Box::new(storage.clone()));

    assert!(store.is_empty());

    store.add(movie("tt1", "Alien"));
    assert_eq!(stored_ids(&storage), ["tt1"]);
}

#[test]
fn failed_read_starts_empty() {
    let storage = MemoryStorage::default()
        .with_slot(FAVORITES_SLOT, "[]")
        .failing_reads();
    let store = FavoritesStore::initialize(Box::new(storage));

    assert!(store.is_empty());
    assert_eq!(store.persist_failures(), 0);
}

#[test]
fn failed_write_keeps_memory_authoritative() {
    let storage = MemoryStorage::default();
    let mut store = FavoritesStore::initialize(Box::new(storage.clone()));
    store.add(movie("tt1", "Alien"));

    storage.set_fail_writes(true);
    assert!(store.add(movie("tt2", "Aliens")));
    assert!(store.remove("tt1"));

    assert_eq!(store.persist_failures(), 2);
    assert!(store.is_favorite("tt2"));
    assert!(!store.is_favorite("tt1"));
    assert_eq!(stored_ids(&storage), ["tt1"]);

    storage.set_fail_writes(false);
    store.add(movie("tt3", "Alien 3"));
    assert_eq!(stored_ids(&storage), ["tt2", "tt3"]);
    assert_eq!(store.persist_failures(), 2);
}

#[test]
fn search_matches_every_token_fuzzily() {
    let mut store = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
    store.add(movie("a", "The Dark Knight"));
    store.add(movie("b", "Dune"));
    store.add(movie("c", "The Darjeeling Limited"));

    let titles = |query: &str| -> Vec<String> {
        store.search(query).into_iter().map(|m| m.title.clone()).collect()
    };

    assert_eq!(titles(""), ["The Dark Knight", "Dune", "The Darjeeling Limited"]);
    assert_eq!(titles("  "), ["The Dark Knight", "Dune", "The Darjeeling Limited"]);
    assert_eq!(titles("knight"), ["The Dark Knight"]);
    assert_eq!(titles("DARK knight"), ["The Dark Knight"]);
    assert!(titles("zzz").is_empty());
}

#[test]
fn json_storage_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let storage = JsonStorage::new(dir.path().to_path_buf()).expect("open storage");
        let mut store = FavoritesStore::initialize(Box::new(storage));
        store.add(movie("tt1160419", "Dune"));
        store.add(movie("tt2543164", "Arrival"));
        store.remove("tt1160419");
    }

    let storage = JsonStorage::new(dir.path().to_path_buf()).expect("reopen storage");
    assert!(storage.read(FAVORITES_SLOT).expect("read").is_some());

    let store = FavoritesStore::initialize(Box::new(storage));
    let ids: Vec<&str> = store.favorites().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["tt2543164"]);
}

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    Toggle(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Add),
        (0u8..6).prop_map(Op::Remove),
        (0u8..6).prop_map(Op::Toggle),
    ]
}

proptest! {
    #[test]
    fn ids_stay_unique_and_persisted(ops in prop::collection::vec(op(), 0..40)) {
        let storage = MemoryStorage::default();
        let mut store = FavoritesStore::initialize(Box::new(storage.clone()));
        let mut expected: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Add(n) => {
                    let id = format!("tt{n}");
                    let changed = store.add(movie(&id, "Title"));
                    prop_assert_eq!(changed, !expected.contains(&id));
                    if changed {
                        expected.push(id);
                    }
                }
                Op::Remove(n) => {
                    let id = format!("tt{n}");
                    let changed = store.remove(&id);
                    prop_assert_eq!(changed, expected.contains(&id));
                    expected.retain(|e| *e != id);
                }
                Op::Toggle(n) => {
                    let id = format!("tt{n}");
                    match store.toggle(movie(&id, "Title")) {
                        Toggled::Added => expected.push(id),
                        Toggled::Removed => expected.retain(|e| *e != id),
                    }
                }
            }
        }

        let ids: Vec<String> = store.favorites().iter().map(|m| m.id.clone()).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(&ids, &expected);

        let reloaded = FavoritesStore::initialize(Box::new(storage));
        let reloaded_ids: Vec<String> = reloaded.favorites().iter().map(|m| m.id.clone()).collect();
        prop_assert_eq!(reloaded_ids, expected);
    }
}
