//! Catalog proxy - forwards listing, detail and search requests to the movie
//! metadata API so the API key never reaches the browser.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /api/movies?page=N` - popular movies, page defaults to 1.
//! - `GET /api/movies/:id` - full details for one movie.
//! - `GET /api/search?q=...` - title search. `q` is required.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_store::proxy::{self, CatalogClient, ProxyConfig};
//!
//! let config = ProxyConfig::from_env()?;
//! let client = CatalogClient::new(&config.base_url, &config.api_key);
//! proxy::serve(client, &config.addr).await?;
//! ```

mod client;
mod config;
mod routes;

use thiserror::Error;

/// Error type for catalog proxy operations.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Required configuration missing or malformed.
    #[error("proxy configuration error: {0}")]
    Config(String),
    /// Upstream answered with a non-success status.
    #[error("catalog API returned {0}")]
    Upstream(u16),
    /// Request never completed or the body could not be decoded.
    #[error("catalog API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Body was JSON but not the expected shape.
    #[error("unexpected catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub use client::CatalogClient;
pub use config::ProxyConfig;
pub use routes::{router, serve};
