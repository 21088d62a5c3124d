//! Catalog records - the shapes returned by the movie metadata API.
//!
//! Only `MovieSummary` is ever persisted. `MovieDetails` is the richer record a
//! detail view fetches; favoriting a movie snapshots its six summary fields.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_store::{MovieDetails, MovieSummary};
//!
//! let details: MovieDetails = serde_json::from_str(body)?;
//! let summary = MovieSummary::from(&details);
//! assert_eq!(summary.id, details.id);
//! ```

mod details;
mod page;
mod summary;

/// Base URL for catalog artwork. Append a size and the record's path.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster size used by cards and the detail view.
pub const POSTER_SIZE: &str = "w500";
/// Poster size used for thumbnails.
pub const THUMB_SIZE: &str = "w200";
/// Backdrop size used for hero banners.
pub const BACKDROP_SIZE: &str = "w1280";

/// Build an artwork URL, or `None` when the record has no artwork.
pub fn image_url(size: &str, path: Option<&str>) -> Option<String> {
    match path {
        Some(p) if !p.is_empty() => Some(format!("{}/{}{}", IMAGE_BASE_URL, size, p)),
        _ => None,
    }
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub use details::{Genre, MovieDetails, ProductionCompany};
pub use page::{MoviePage, PageCursor};
pub use summary::MovieSummary;
