/*
[INPUT]:  HTTP status code and raw response body bytes
[OUTPUT]: Typed response value or classified error
[POS]:    HTTP layer - response decoder / error classifier
[UPDATE]: When changing rejection or deserialization rules
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::http::{CurrencyComError, Result};

/// Classify a raw response and deserialize it into `T`.
///
/// Status >= 400 yields `RemoteRejected` with the body verbatim; the reject
/// reason inside it is left for the caller to interpret.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_client_error() || status.is_server_error() {
        return Err(CurrencyComError::remote_rejected(
            status,
            String::from_utf8_lossy(body),
        ));
    }

    serde_json::from_slice(body).map_err(|source| CurrencyComError::MalformedResponse {
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
