/*
[INPUT]:  API key and secret (explicit or from environment)
[OUTPUT]: Immutable credential pair for signed requests
[POS]:    Auth layer - credential storage
[UPDATE]: When changing credential sources or redaction rules
*/

use config::{Config, Environment};
use serde::Deserialize;

use crate::http::{CurrencyComError, Result};

/// Environment variable prefix shared by all adapter settings
pub(crate) const ENV_PREFIX: &str = "CURRENCYCOM";

#[derive(Debug, Deserialize)]
struct EnvCredentials {
    api_key: String,
    api_secret: String,
}

/// API credentials for signed requests.
///
/// The key travels in the `X-MBX-APIKEY` header. The secret never leaves
/// the process; it only keys the HMAC.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret: String,
}

impl ApiCredentials {
    /// Create credentials from explicit values
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Load credentials from `CURRENCYCOM_API_KEY` and `CURRENCYCOM_API_SECRET`.
    ///
    /// # Errors
    /// Returns `CurrencyComError::Config` if either variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_environment(environment: Environment) -> Result<Self> {
        let loaded: EnvCredentials = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| CurrencyComError::Config(format!("failed to load credentials: {e}")))?;

        if loaded.api_key.trim().is_empty() || loaded.api_secret.trim().is_empty() {
            return Err(CurrencyComError::Config(
                "api key and secret must not be empty".to_string(),
            ));
        }

        Ok(Self::new(loaded.api_key, loaded.api_secret))
    }

    /// Get the API key (public, safe to log)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret for HMAC keying only
    pub(crate) fn expose_secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
