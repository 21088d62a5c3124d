//! HTTP integration tests for the catalog proxy.
//!
//! A fake catalog API is served by axum on an ephemeral port; the proxy under
//! test points at it and is exercised with reqwest.


use catalog_store::proxy::{self, CatalogClient};
use catalog_store::{InMemorySlotStorage, LocalCatalogStore, ProxyError};
use serde_json::Value;

use upstream::{spawn_upstream, API_KEY};

async fn spawn_proxy(upstream_base: &str, api_key: &str) -> String {
    let client = CatalogClient::new(upstream_base, api_key);
    let app = proxy::router(client);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn get(url: &str) -> (u16, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn popular_defaults_to_first_page() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/movies", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["results"][0]["id"], 101);
}

#[tokio::test]
async fn popular_forwards_page_number() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/movies?page=2", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 2);
    assert_eq!(body["results"][0]["id"], 201);
}

#[tokio::test]
async fn unparseable_page_is_forwarded_and_fails() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/movies?page=abc", base)).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to fetch movies");

    let (status, body) = get(&format!("{}/api/movies?page=", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn movie_details_passthrough() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/movies/27205", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Inception");
    assert_eq!(body["runtime"], 148);
}

#[tokio::test]
async fn movie_details_upstream_failure_is_500() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/movies/404404", base)).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to fetch movie details");
}

#[tokio::test]
async fn search_requires_query() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/search", base)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Query parameter is required");

    let (status, _) = get(&format!("{}/api/search?q=", base)).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn search_encodes_query() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/search?q=the%20dark%20knight", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["results"][0]["title"], "the dark knight");
}

#[tokio::test]
async fn whitespace_query_is_forwarded_untrimmed() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, API_KEY).await;

    let (status, body) = get(&format!("{}/api/search?q=%20%20", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["results"][0]["title"], "  ");
}

#[tokio::test]
async fn bad_api_key_maps_to_500() {
    let upstream = spawn_upstream().await;
    let base = spawn_proxy(&upstream, "wrong-key").await;

    let (status, body) = get(&format!("{}/api/movies", base)).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to fetch movies");

    let (status, body) = get(&format!("{}/api/search?q=matrix", base)).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to search movies");
}

#[tokio::test]
async fn typed_client_feeds_favorites() {
    let upstream = spawn_upstream().await;
    let client = CatalogClient::new(&upstream, API_KEY);

    let page = client.popular_page(1).await.unwrap();
    assert!(page.has_more());
    assert_eq!(page.results.len(), 2);

    let details = client.movie_details(27205).await.unwrap();
    let store = LocalCatalogStore::shared(InMemorySlotStorage::new());
    assert!(store.toggle(&details.summary()));

    let annotated = store.annotate(&page.results);
    assert!(annotated.iter().all(|s| !s.favorite));
    assert_eq!(store.list()[0].title, "Inception");
}

#[tokio::test]
async fn typed_client_reports_upstream_status() {
    let upstream = spawn_upstream().await;
    let client = CatalogClient::new(&upstream, API_KEY);

    let err = client.movie_details(404404).await.unwrap_err();
    assert!(matches!(err, ProxyError::Upstream(404)));
}
