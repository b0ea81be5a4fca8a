/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public currency.com adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiCredentials, Clock, FixedClock, HmacSigner, SystemClock};

// Re-export commonly used types from http
pub use http::{
    API_KEY_HEADER,
    API_VERSION,
    ClientConfig,
    CurrencyComClient,
    CurrencyComError,
    DEFAULT_ENDPOINT,
    ParameterSet,
    PreparedRequest,
    Result,
};

// Re-export all types
pub use types::*;
