//! Change notifications for favorites toggles.
//!
//! Requires the `emitter` feature (on by default).

mod favorites_ext;

pub use favorites_ext::{
    EmittableStore, FavoriteEvent, FavoritesEmitter, FAVORITE_ADDED, FAVORITE_REMOVED,
};
