//! Test helper utilities for lead API integration tests

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use webserver::traits::MailTransport;
use webserver::{MailConfig, RealLeadStore, ServerConfig, WebServer};

/// Bind address used for router tests (never actually bound)
pub fn test_address() -> SocketAddr {
    "127.0.0.1:5000".parse().unwrap()
}

/// Store path inside a fresh temporary directory
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("leads.csv");
    (dir, path)
}

/// Mail settings with a password present, so notifications are attempted
pub fn configured_mail() -> MailConfig {
    let mut config = MailConfig::disabled().with_password("secret");
    config.internal_email = "ops@mobtronic.org".to_string();
    config
}

/// Build a webserver over a real CSV store at `path`
pub fn build_server<M: MailTransport + 'static>(
    path: &Path,
    transport: M,
    mail_config: MailConfig,
) -> WebServer<RealLeadStore, M> {
    let config = ServerConfig::new(test_address()).with_store_path(path.to_path_buf());
    let store = RealLeadStore::new(config.store_path.clone(), config.lead_id_prefix.clone());
    WebServer::new(config, store, transport, mail_config)
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request through the router and decode the JSON reply
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Matches `PREFIX-YYYYMMDD-NNNN`
pub fn lead_id_matches(id: &str, prefix: &str) -> bool {
    let pattern = format!(r"^{}-\d{{8}}-\d{{4}}$", regex::escape(prefix));
    regex::Regex::new(&pattern).unwrap().is_match(id)
}
