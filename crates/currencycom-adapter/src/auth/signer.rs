/*
[INPUT]:  Encoded query-string bytes and API secret
[OUTPUT]: Lowercase hex HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or digest encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::ApiCredentials;
use crate::http::Result;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed by the API secret
#[derive(Debug)]
pub struct HmacSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> HmacSigner<'a> {
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a payload and return the lowercase hex digest
    pub fn sign(&self, payload: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        // Published HMAC-SHA256 example for X-MBX-APIKEY style APIs
        let creds = ApiCredentials::new(
            "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A",
            "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j",
        );
        let signer = HmacSigner::new(&creds);

        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        let signature = signer.sign(query.as_bytes()).expect("sign");

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_sign_encoded_symbol() {
        let creds = ApiCredentials::new("key", "test-secret");
        let signer = HmacSigner::new(&creds);

        let signature = signer
            .sign(b"symbol=BTC%2FUSD&timestamp=1700000000000")
            .expect("sign");

        assert_eq!(
            signature,
            "d9e69d649268e841f7be55e39b85a932026edf637de3fb2b6ddc7dd190d964ba"
        );
    }

    #[test]
    fn test_sign_empty_payload() {
        let creds = ApiCredentials::new("key", "test-secret");
        let signature = HmacSigner::new(&creds).sign(b"").expect("sign");

        assert_eq!(
            signature,
            "a41bc6d81d6413576ae0994995e0ad89a416ec97389515c3604f47722122eeeb"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let creds = ApiCredentials::new("key", "another-secret");
        let signature = HmacSigner::new(&creds).sign(b"timestamp=1").expect("sign");

        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
