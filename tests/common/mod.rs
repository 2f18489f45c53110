//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::net::TcpListener;

use tudu::api::{ApiClient, ApiError};
use tudu::config::ServerConfig;

/// Find an available port, then release it so connections get refused.
pub fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client pointed at `base_url`, optionally with a pre-seeded cookie.
pub fn make_client(base_url: &str, cookie: Option<&str>) -> ApiClient {
    let config = ServerConfig {
        base_url: base_url.to_string(),
        session_cookie: cookie.map(String::from),
    };
    ApiClient::new(&config).expect("Failed to build api client")
}

/// Harvest a real transport-level `ApiError` from a refused connection.
pub async fn transport_error() -> ApiError {
    let client = make_client(&format!("http://127.0.0.1:{}", refused_port()), None);
    client
        .list_todos()
        .await
        .expect_err("connection should be refused")
}
