pub mod catalog;
pub mod config;
#[cfg(feature = "emitter")]
pub mod emitter;
pub mod favorites;
pub mod logging;
#[cfg(feature = "http")]
pub mod proxy;
pub mod slot;

pub use catalog::{
    image_url, Genre, MovieDetails, MoviePage, MovieSummary, PageCursor, ProductionCompany,
    BACKDROP_SIZE, IMAGE_BASE_URL, POSTER_SIZE, THUMB_SIZE,
};
pub use config::{ConfigError, StoreConfig};
pub use favorites::{AddPolicy, FavoriteStatus, LocalCatalogStore, ProfileKey, FAVORITES_SLOT};
pub use slot::{FileSlotStorage, InMemorySlotStorage, SlotError, SlotStorage};

#[cfg(feature = "emitter")]
pub use emitter::{EmittableStore, FavoritesEmitter, FAVORITE_ADDED, FAVORITE_REMOVED};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

#[cfg(feature = "http")]
pub use proxy::{CatalogClient, ProxyConfig, ProxyError};
