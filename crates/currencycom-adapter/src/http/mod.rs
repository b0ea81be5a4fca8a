/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed requests, decoded responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod decode;
pub mod error;
pub mod public;
pub mod query;
pub mod request;
pub mod trade;
pub mod user;

pub use error::{CurrencyComError, Result};
pub use query::ParameterSet;
pub use request::{API_KEY_HEADER, API_VERSION, PreparedRequest, build_request};

pub use client::{ClientConfig, CurrencyComClient, DEFAULT_ENDPOINT};
