use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use super::ProxyError;
use crate::catalog::{MovieDetails, MoviePage, MovieSummary};

/// Client for the movie metadata API.
///
/// The raw methods return the upstream JSON untouched for passthrough; the
/// typed methods decode it into catalog records.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /movie/popular?page={page}`
    pub async fn popular(&self, page: u32) -> Result<Value, ProxyError> {
        self.popular_raw(&page.to_string()).await
    }

    /// Same as [`popular`](Self::popular) with the page forwarded verbatim;
    /// the upstream decides whether it is valid.
    pub async fn popular_raw(&self, page: &str) -> Result<Value, ProxyError> {
        self.get_json("/movie/popular", &[("page", page)]).await
    }

    /// `GET /movie/{id}`
    pub async fn movie(&self, id: i64) -> Result<Value, ProxyError> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    /// `GET /search/movie?query={query}`
    pub async fn search(&self, query: &str) -> Result<Value, ProxyError> {
        self.get_json("/search/movie", &[("query", query)]).await
    }

    pub async fn popular_page(&self, page: u32) -> Result<MoviePage<MovieSummary>, ProxyError> {
        Ok(serde_json::from_value(self.popular(page).await?)?)
    }

    pub async fn movie_details(&self, id: i64) -> Result<MovieDetails, ProxyError> {
        Ok(serde_json::from_value(self.movie(id).await?)?)
    }

    pub async fn search_page(&self, query: &str) -> Result<MoviePage<MovieSummary>, ProxyError> {
        Ok(serde_json::from_value(self.search(query).await?)?)
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ProxyError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Upstream(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
