//! Tests for the page fetcher

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::services::RealPageFetcher;
use crate::traits::PageFetcher;

fn fetcher() -> RealPageFetcher {
    RealPageFetcher::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><h1>Mobtronic</h1></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher().fetch(&format!("{}/", server.uri())).await;
    assert_eq!(body.as_deref(), Some("<html><h1>Mobtronic</h1></html>"));
}

#[tokio::test]
async fn test_fetch_error_status_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    assert!(fetcher().fetch(&server.uri()).await.is_none());
}

#[tokio::test]
async fn test_fetch_blank_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
        .mount(&server)
        .await;

    assert!(fetcher().fetch(&server.uri()).await.is_none());
}

#[tokio::test]
async fn test_fetch_timeout_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("late").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let fetcher = RealPageFetcher::new(Duration::from_millis(200)).unwrap();
    assert!(fetcher.fetch(&server.uri()).await.is_none());
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_empty() {
    // Port 9 (discard) on loopback is not expected to accept HTTP
    assert!(fetcher().fetch("http://127.0.0.1:9/").await.is_none());
}
