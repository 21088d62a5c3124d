use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use super::{CatalogClient, ProxyError};

/// Build an axum `Router` serving the three catalog passthrough endpoints.
pub fn router(client: CatalogClient) -> Router {
    Router::new()
        .route("/api/movies", get(popular_handler))
        .route("/api/movies/:id", get(movie_handler))
        .route("/api/search", get(search_handler))
        .with_state(Arc::new(client))
}

/// Serve the proxy over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(client: CatalogClient, addr: &str) -> Result<(), std::io::Error> {
    let app = router(client);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr, "catalog proxy listening");
    axum::serve(listener, app).await
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// `GET /api/movies?page=N`
async fn popular_handler(
    State(client): State<Arc<CatalogClient>>,
    Query(params): Query<PageParams>,
) -> Response {
    let page = params.page.filter(|p| !p.is_empty());
    let page = page.as_deref().unwrap_or("1");
    passthrough(client.popular_raw(page).await, "Failed to fetch movies")
}

/// `GET /api/movies/:id`
async fn movie_handler(
    State(client): State<Arc<CatalogClient>>,
    Path(id): Path<String>,
) -> Response {
    let result = match id.parse::<i64>() {
        Ok(id) => client.movie(id).await,
        Err(_) => Err(ProxyError::Upstream(StatusCode::NOT_FOUND.as_u16())),
    };
    passthrough(result, "Failed to fetch movie details")
}

/// `GET /api/search?q=...`
async fn search_handler(
    State(client): State<Arc<CatalogClient>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return error_response(StatusCode::BAD_REQUEST, "Query parameter is required"),
    };
    passthrough(client.search(&query).await, "Failed to search movies")
}

fn passthrough(result: Result<Value, ProxyError>, failure: &str) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!(error = %e, "{}", failure);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
