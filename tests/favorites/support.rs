use catalog_store::{InMemorySlotStorage, LocalCatalogStore, MovieSummary};

pub fn inception() -> MovieSummary {
    MovieSummary::new(27205, "Inception")
        .with_poster("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
        .with_vote_average(8.4)
        .with_release_date("2010-07-15")
        .with_overview("Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets.")
}

pub fn movie(id: i64, title: &str) -> MovieSummary {
    MovieSummary::new(id, title).with_release_date("2000-01-01")
}

pub fn ids<S: catalog_store::SlotStorage>(store: &LocalCatalogStore<S>) -> Vec<i64> {
    store.list().iter().map(|m| m.id).collect()
}

pub fn memory_store() -> LocalCatalogStore<InMemorySlotStorage> {
    LocalCatalogStore::shared(InMemorySlotStorage::new())
}
