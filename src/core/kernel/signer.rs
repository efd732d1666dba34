use crate::core::errors::ExchangeError;
use std::collections::HashMap;

/// Result type for signing operations: authentication headers to attach
pub type SignatureResult = Result<HashMap<String, String>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations own the exchange-specific signing scheme. The transport
/// computes the query string, body and nonce once and hands them over, so the
/// headers always describe exactly what is sent.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to include
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, ...)
    /// * `endpoint` - API endpoint path
    /// * `query_string` - Query string (without leading '?')
    /// * `body` - JSON body string
    /// * `nonce` - Request nonce in milliseconds
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        body: &str,
        nonce: u64,
    ) -> SignatureResult;
}
