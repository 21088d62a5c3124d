//! Integration tests for LocalCatalogStore over in-memory slots.

mod support;

use catalog_store::{
    AddPolicy, InMemorySlotStorage, LocalCatalogStore, MovieDetails, SlotStorage, FAVORITES_SLOT,
};
use support::{ids, inception, memory_store, movie};

#[test]
fn add_to_empty_store() {
    let store = memory_store();
    assert!(store.list().is_empty());

    store.add(inception());

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 27205);
    assert_eq!(listed[0], inception());
}

#[test]
fn list_preserves_insertion_order() {
    let store = memory_store();
    store.add(movie(1, "One"));
    store.add(movie(2, "Two"));
    store.add(movie(3, "Three"));

    assert_eq!(ids(&store), vec![1, 2, 3]);
}

#[test]
fn list_does_not_sort() {
    let store = memory_store();
    store.add(movie(30, "c"));
    store.add(movie(10, "a"));
    store.add(movie(20, "b"));

    assert_eq!(ids(&store), vec![30, 10, 20]);
}

#[test]
fn append_policy_keeps_duplicate_ids() {
    let store = memory_store().with_policy(AddPolicy::Append);
    store.add(movie(5, "First Title"));
    store.add(movie(5, "Second Title"));

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|m| m.id == 5));
    assert_eq!(listed[0].title, "First Title");
    assert_eq!(listed[1].title, "Second Title");
}

#[test]
fn upsert_policy_replaces_duplicate_ids() {
    let store = memory_store();
    assert_eq!(store.policy(), AddPolicy::Upsert);

    store.add(movie(5, "First Title"));
    store.add(movie(5, "Second Title"));

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Second Title");
}

#[test]
fn repeated_remove_is_harmless() {
    let store = memory_store();
    store.add(movie(10, "Ten"));

    store.remove(10);
    store.remove(10);

    assert!(store.list().is_empty());
}

#[test]
fn remove_absent_id_leaves_list_unchanged() {
    let store = memory_store();
    store.add(movie(1, "One"));
    store.add(movie(2, "Two"));
    let before = store.list();

    store.remove(99);

    assert_eq!(store.list(), before);
}

#[test]
fn add_then_remove_round_trip() {
    let store = memory_store();
    let m = inception();

    store.add(m.clone());
    assert!(store.contains(m.id));

    store.remove(m.id);
    assert!(!store.contains(m.id));
}

#[test]
fn corrupt_slot_reads_empty_and_recovers() {
    let slots = InMemorySlotStorage::new();
    slots.write_slot(FAVORITES_SLOT, "not json").unwrap();
    let store = LocalCatalogStore::shared(slots.clone());

    assert!(store.list().is_empty());
    assert!(!store.contains(27205));

    store.add(inception());
    assert_eq!(ids(&store), vec![27205]);

    let raw = slots.read_slot(FAVORITES_SLOT).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed.is_array());
}

#[test]
fn wrong_json_shape_reads_empty() {
    let slots = InMemorySlotStorage::new();
    slots
        .write_slot(FAVORITES_SLOT, r#"{"id": 1, "title": "not a list"}"#)
        .unwrap();
    let store = LocalCatalogStore::shared(slots);

    assert!(store.list().is_empty());
}

#[test]
fn toggle_is_what_views_call() {
    let store = memory_store();
    let details: MovieDetails = serde_json::from_value(serde_json::json!({
        "id": 603,
        "title": "The Matrix",
        "poster_path": "/matrix.jpg",
        "backdrop_path": "/matrix-bg.jpg",
        "vote_average": 8.2,
        "release_date": "1999-03-30",
        "runtime": 136,
        "overview": "Set in the 22nd century...",
        "genres": [{ "id": 28, "name": "Action" }],
        "production_companies": []
    }))
    .unwrap();

    assert!(store.toggle(&details.summary()));
    let stored = store.get(603).unwrap();
    assert_eq!(stored.poster_path.as_deref(), Some("/matrix.jpg"));
    assert_eq!(stored.vote_average, 8.2);

    assert!(!store.toggle(&details.summary()));
    assert!(store.is_empty());
}

#[test]
fn stores_sharing_a_slot_see_each_others_writes() {
    let slots = InMemorySlotStorage::new();
    let card = LocalCatalogStore::shared(slots.clone());
    let favorites_page = LocalCatalogStore::shared(slots);

    card.toggle(&inception());
    assert_eq!(favorites_page.list(), vec![inception()]);
}

#[test]
fn annotate_search_results() {
    let store = memory_store();
    store.add(movie(2, "Two"));
    store.add(movie(4, "Four"));

    let results = vec![movie(1, "One"), movie(2, "Two"), movie(4, "Four")];
    let annotated = store.annotate(&results);

    let flags: Vec<(i64, bool)> = annotated.iter().map(|s| (s.movie.id, s.favorite)).collect();
    assert_eq!(flags, vec![(1, false), (2, true), (4, true)]);
}
