use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The exchange answered `{"status":"error","code":429}`.
    #[error("Got error message: {0}")]
    RateLimited(String),

    #[error("Unable to parse data: {0}")]
    UnparsableResponse(String),

    #[error("Unable to process data: {0}")]
    ResponseProcessing(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response without a usable JSON object body
    #[error("Request failed with status code {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Failure while preparing a request, before anything was sent
    #[error("Request preparation failed: {0}")]
    Preflight(String),

    #[error("Authentication required but no credentials configured")]
    AuthenticationRequired,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The connector itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::HttpError(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
