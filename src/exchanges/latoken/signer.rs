use crate::core::errors::ExchangeError;
use crate::core::kernel::{SignatureResult, Signer};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::collections::HashMap;

type HmacSha512 = Hmac<Sha512>;

/// LATOKEN HMAC-SHA512 signer for authenticated requests
#[derive(Clone)]
pub struct LatokenSigner {
    api_key: String,
    secret_key: String,
}

impl std::fmt::Debug for LatokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatokenSigner").finish_non_exhaustive()
    }
}

/// Hex encoded HMAC-SHA512 of `message` keyed with `secret`
pub fn sign(secret: &str, message: &str) -> Result<String, ExchangeError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;

    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// The string that gets signed: `<payload>_<nonce>_<path>`
pub fn signature_message(payload: &str, nonce: u64, path: &str) -> String {
    format!("{}_{}_{}", payload, nonce, path)
}

impl LatokenSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    /// GET requests sign the query string, every other method signs the JSON body
    pub fn sign_payload<'a>(method: &str, query_string: &'a str, body: &'a str) -> &'a str {
        if method.eq_ignore_ascii_case("GET") {
            query_string
        } else {
            body
        }
    }
}

impl Signer for LatokenSigner {
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        body: &str,
        nonce: u64,
    ) -> SignatureResult {
        let payload = Self::sign_payload(method, query_string, body);
        let signature = sign(&self.secret_key, &signature_message(payload, nonce, endpoint))?;

        let mut headers = HashMap::new();
        headers.insert("Token".to_string(), self.api_key.clone());
        headers.insert("Nonce".to_string(), nonce.to_string());
        headers.insert("Signature".to_string(), signature);
        headers.insert("Type".to_string(), "api".to_string());

        Ok(headers)
    }
}
