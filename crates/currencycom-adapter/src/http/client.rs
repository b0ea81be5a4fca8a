/*
[INPUT]:  HTTP configuration (endpoint, timeouts), optional credentials, clock
[OUTPUT]: Configured reqwest client that prepares, sends and decodes API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::auth::credentials::ENV_PREFIX;
use crate::auth::{ApiCredentials, Clock, SystemClock};
use crate::http::decode::decode_response;
use crate::http::request::{PreparedRequest, build_request};
use crate::http::{CurrencyComError, ParameterSet, Result};

/// Public currency.com API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api-adapter.backend.currency.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; empty means [`DEFAULT_ENDPOINT`]
    pub endpoint: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnvClientConfig {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Load from `CURRENCYCOM_ENDPOINT`, `CURRENCYCOM_TIMEOUT_SECS` and
    /// `CURRENCYCOM_CONNECT_TIMEOUT_SECS`; unset values keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_environment(environment: Environment) -> Result<Self> {
        let loaded: EnvClientConfig = Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| CurrencyComError::Config(format!("failed to load client config: {e}")))?;

        let mut config = Self::default();
        if let Some(endpoint) = loaded.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(secs) = loaded.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = loaded.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Endpoint with the default substituted for an empty value
    pub fn resolved_endpoint(&self) -> &str {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            endpoint
        }
    }
}

/// Main HTTP client for the currency.com REST API.
///
/// Endpoint, credentials and clock are fixed at construction; the client is
/// `Send + Sync` and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct CurrencyComClient {
    http_client: Client,
    endpoint: String,
    credentials: Option<ApiCredentials>,
    clock: Arc<dyn Clock>,
}

impl CurrencyComClient {
    /// Create a client for public endpoints only
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a client able to call signed endpoints
    pub fn with_credentials(config: ClientConfig, credentials: ApiCredentials) -> Result<Self> {
        Self::build(config, Some(credentials))
    }

    /// Create a client from `CURRENCYCOM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_credentials(ClientConfig::from_env()?, ApiCredentials::from_env()?)
    }

    fn build(config: ClientConfig, credentials: Option<ApiCredentials>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.resolved_endpoint().trim_end_matches('/').to_string(),
            credentials,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source used for signed requests
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&ApiCredentials> {
        self.credentials.as_ref()
    }

    /// Build a request without sending it
    pub fn prepare(
        &self,
        method: Method,
        method_name: &str,
        params: ParameterSet,
        signed: bool,
    ) -> Result<PreparedRequest> {
        let credentials = if signed {
            Some(
                self.credentials
                    .as_ref()
                    .ok_or(CurrencyComError::MissingCredentials)?,
            )
        } else {
            None
        };

        build_request(
            method,
            &self.endpoint,
            method_name,
            params,
            credentials,
            self.clock.as_ref(),
        )
    }

    /// Send a prepared request and decode the response body
    pub async fn execute<T: DeserializeOwned>(&self, request: PreparedRequest) -> Result<T> {
        let PreparedRequest {
            method,
            url,
            headers,
        } = request;
        let path = url.path().to_string();

        let response = self
            .http_client
            .request(method.clone(), url)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            body_len = body.len(),
            "response received"
        );

        decode_response(status, &body)
    }

    pub(crate) async fn send_public<T: DeserializeOwned>(
        &self,
        method: Method,
        method_name: &str,
        params: ParameterSet,
    ) -> Result<T> {
        self.send(method, method_name, params, false).await
    }

    pub(crate) async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        method_name: &str,
        params: ParameterSet,
    ) -> Result<T> {
        self.send(method, method_name, params, true).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        method_name: &str,
        params: ParameterSet,
        signed: bool,
    ) -> Result<T> {
        tracing::debug!(
            method = %method,
            method_name,
            signed,
            param_count = params.len(),
            "sending request"
        );

        let request = self.prepare(method, method_name, params, signed)?;
        self.execute(request).await
    }
}
