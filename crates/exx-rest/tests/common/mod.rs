//! Common test utilities for exx-rest integration tests

#![allow(dead_code)]

use exx_rest::{ClientConfig, Credentials, ExxRestClient};
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "api_key";
pub const SECRET_KEY: &str = "api_secret";

/// Install a test-writer subscriber so `tracing` output shows up on failure
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("exx_rest=debug")
        .with_test_writer()
        .try_init();
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Client with both hosts pointed at the mock server and no credentials
pub fn public_client(server: &MockServer) -> ExxRestClient {
    let config = ClientConfig::new()
        .with_public_url(server.uri())
        .with_private_url(server.uri());
    ExxRestClient::with_config(config).expect("client init")
}

/// Client with both hosts pointed at the mock server and test credentials
pub fn signed_client(server: &MockServer) -> ExxRestClient {
    let config = ClientConfig::new()
        .with_public_url(server.uri())
        .with_private_url(server.uri())
        .with_credentials(test_credentials());
    ExxRestClient::with_config(config).expect("client init")
}

pub fn test_credentials() -> Credentials {
    Credentials::new(ACCESS_KEY, SECRET_KEY)
}
