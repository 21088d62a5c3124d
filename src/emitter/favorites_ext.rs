use event_emitter_rs::EventEmitter;
use tracing::warn;

use crate::catalog::MovieSummary;
use crate::favorites::LocalCatalogStore;
use crate::slot::SlotStorage;

/// Emitted after a movie was committed to favorites. Payload: the record as JSON.
pub const FAVORITE_ADDED: &str = "FavoriteAdded";
/// Emitted after a movie was committed out of favorites. Payload: the record as JSON.
pub const FAVORITE_REMOVED: &str = "FavoriteRemoved";

/// A notification waiting to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEvent {
    pub event_type: String,
    pub data: String,
}

/// Wrapper that notifies listeners when a store's contents change.
///
/// `toggle`, `add` and `remove` queue an event only once the store has
/// committed a change; a write that failed queues nothing. Queued events fire
/// on `emit_queued`.
///
/// # Example
///
/// ```ignore
/// use catalog_store::emitter::{EmittableStore, FAVORITE_ADDED};
///
/// let mut favorites = store.with_emitter();
///
/// favorites.on(FAVORITE_ADDED, |data| {
///     println!("Added to favorites: {}", data);
/// });
///
/// favorites.toggle(&movie);
/// favorites.emit_queued();
/// ```
pub struct FavoritesEmitter<S> {
    store: LocalCatalogStore<S>,
    event_emitter: EventEmitter,
    events_to_emit: Vec<FavoriteEvent>,
}

impl<S: SlotStorage> FavoritesEmitter<S> {
    /// Wrap a store with emitter capabilities.
    pub fn new(store: LocalCatalogStore<S>) -> Self {
        Self {
            store,
            event_emitter: EventEmitter::new(),
            events_to_emit: Vec::new(),
        }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &LocalCatalogStore<S> {
        &self.store
    }

    /// Unwrap and return the underlying store.
    pub fn into_store(self) -> LocalCatalogStore<S> {
        self.store
    }

    /// Register a listener for an event type.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    /// Toggle `record` in the store, queueing an event if its state changed.
    pub fn toggle(&mut self, record: &MovieSummary) -> bool {
        let was_favorite = self.store.contains(record.id);
        let favorite = self.store.toggle(record);

        if favorite != was_favorite {
            let event_type = if favorite {
                FAVORITE_ADDED
            } else {
                FAVORITE_REMOVED
            };
            self.enqueue(event_type, record);
        }

        favorite
    }

    /// Add `record`, queueing `FavoriteAdded` if it was not a favorite before.
    pub fn add(&mut self, record: MovieSummary) {
        let was_favorite = self.store.contains(record.id);
        self.store.add(record.clone());

        if !was_favorite && self.store.contains(record.id) {
            self.enqueue(FAVORITE_ADDED, &record);
        }
    }

    /// Remove `id`, queueing `FavoriteRemoved` with the record that was stored.
    pub fn remove(&mut self, id: i64) {
        let previous = self.store.get(id);
        self.store.remove(id);

        if let Some(previous) = previous {
            if !self.store.contains(id) {
                self.enqueue(FAVORITE_REMOVED, &previous);
            }
        }
    }

    /// Emit all queued events. Call this once the caller is done mutating.
    pub fn emit_queued(&mut self) {
        let events: Vec<_> = self.events_to_emit.drain(..).collect();
        for event in events {
            self.event_emitter.emit(&event.event_type, event.data);
        }
    }

    /// Number of events queued for emission.
    pub fn queued_len(&self) -> usize {
        self.events_to_emit.len()
    }

    fn enqueue(&mut self, event_type: &str, record: &MovieSummary) {
        match serde_json::to_string(record) {
            Ok(data) => self.events_to_emit.push(FavoriteEvent {
                event_type: event_type.to_string(),
                data,
            }),
            Err(e) => warn!(id = record.id, error = %e, "dropping {} notification", event_type),
        }
    }
}

/// Trait for stores that can be extended with emitter capabilities.
pub trait EmittableStore<S> {
    /// Wrap with emitter capabilities.
    fn with_emitter(self) -> FavoritesEmitter<S>;
}

impl<S: SlotStorage> EmittableStore<S> for LocalCatalogStore<S> {
    fn with_emitter(self) -> FavoritesEmitter<S> {
        FavoritesEmitter::new(self)
    }
}
