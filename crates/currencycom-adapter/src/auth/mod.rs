/*
[INPUT]:  API key/secret pairs and wall-clock time
[OUTPUT]: Credentials, HMAC signatures, and request timestamps
[POS]:    Auth layer - handles currency.com request authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod clock;
pub mod credentials;
pub mod signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::ApiCredentials;
pub use signer::HmacSigner;
