/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for currencycom-adapter tests

#![allow(dead_code)]

use std::sync::Arc;

use currencycom_adapter::{ApiCredentials, ClientConfig, CurrencyComClient, FixedClock};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";
pub const TEST_TIMESTAMP: u64 = 1_700_000_000_000;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> CurrencyComClient {
    CurrencyComClient::new(ClientConfig::default().with_endpoint(server.uri()))
        .expect("client init")
}

/// Client with test credentials and a frozen clock
pub fn signed_client(server: &MockServer) -> CurrencyComClient {
    CurrencyComClient::with_credentials(
        ClientConfig::default().with_endpoint(server.uri()),
        ApiCredentials::new(TEST_API_KEY, TEST_SECRET),
    )
    .expect("client init")
    .with_clock(Arc::new(FixedClock::new(TEST_TIMESTAMP)))
}

/// Matches requests whose `signature` is the HMAC-SHA256 of the rest of the raw query
#[derive(Clone)]
pub struct ValidQuerySignatureMatcher {
    secret: String,
}

impl ValidQuerySignatureMatcher {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }
}

impl Match for ValidQuerySignatureMatcher {
    fn matches(&self, request: &Request) -> bool {
        let query = match request.url.query() {
            Some(query) => query,
            None => return false,
        };

        let mut signature = None;
        let mut signed = Vec::new();
        for pair in query.split('&') {
            match pair.strip_prefix("signature=") {
                Some(value) => signature = Some(value),
                None => signed.push(pair),
            }
        }

        let signature = match signature {
            Some(value) => value,
            None => return false,
        };

        let mut mac = match Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(signed.join("&").as_bytes());

        hex::encode(mac.finalize().into_bytes()) == signature
    }
}
