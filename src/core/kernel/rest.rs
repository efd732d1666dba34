use crate::core::config::ConfigError;
use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::Signer;
use crate::core::logging::{Logger, TracingLogger};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// Ordered request parameters. Iteration order is insertion order.
pub type Params = Map<String, Value>;

/// REST client trait for making HTTP requests
///
/// Both helpers resolve with the raw JSON body. A non-2xx response that
/// still carries a non-empty JSON object resolves as well, since the
/// exchange reports business errors (e.g. "order not found") that way.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a signed request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - The API endpoint path
    /// * `params` - Parameters, sent as query string (non-POST) and JSON body (non-GET)
    async fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<Value, ExchangeError>;

    /// Make an unauthenticated request. No body is ever sent.
    async fn public_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<Value, ExchangeError>;

    /// Make a GET request
    async fn get(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        if authenticated {
            self.signed_request(Method::GET, endpoint, params).await
        } else {
            self.public_request(Method::GET, endpoint, params).await
        }
    }

    /// Make a POST request
    async fn post(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        if authenticated {
            self.signed_request(Method::POST, endpoint, params).await
        } else {
            self.public_request(Method::POST, endpoint, params).await
        }
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 10,
            user_agent: concat!("latoken-connector/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    logger: Option<Arc<dyn Logger>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            logger: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Set the logger that receives failure reports
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigError(ConfigError::InvalidConfiguration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    logger: Arc<dyn Logger>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

/// Serialize a typed parameter struct into ordered request parameters
pub fn to_params<T: Serialize>(request: &T) -> Result<Params, ExchangeError> {
    match serde_json::to_value(request)
        .map_err(|e| ExchangeError::SerializationError(e.to_string()))?
    {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(ExchangeError::InvalidParameters(format!(
            "Request parameters must serialize to an object, got {}",
            other
        ))),
    }
}

/// Create query string from parameters
///
/// Pairs keep insertion order and values are inserted verbatim: no URL
/// encoding, strings without quotes. A `#` would start a URL fragment, so
/// requests that put such a query into the URL are refused before dispatch.
pub fn create_query_string(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// `Some(msg)` when the body is the exchange's rate-limit envelope
fn rate_limit_message(value: &Value) -> Option<String> {
    let body = value.as_object()?;
    let is_error = body.get("status").and_then(Value::as_str) == Some("error");
    let is_429 = body.get("code").and_then(Value::as_f64) == Some(429.0);
    if !(is_error && is_429) {
        return None;
    }

    Some(match body.get("msg") {
        Some(Value::String(msg)) => msg.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    })
}

/// Inspect the body of a 2xx response
fn inspect_success_body(text: &str) -> Result<Value, ExchangeError> {
    if text.trim().is_empty() {
        return Err(ExchangeError::UnparsableResponse(text.to_string()));
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ExchangeError::UnparsableResponse(format!("{} ({})", text, e)))?;

    if is_falsy(&value) {
        return Err(ExchangeError::UnparsableResponse(value.to_string()));
    }

    if let Some(msg) = rate_limit_message(&value) {
        return Err(ExchangeError::RateLimited(msg));
    }

    Ok(value)
}

/// Inspect the body of a non-2xx response
fn inspect_failure_body(status: u16, text: &str) -> Result<Value, ExchangeError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(msg) = rate_limit_message(&value) {
            return Err(ExchangeError::RateLimited(msg));
        }
        if value.as_object().is_some_and(|body| !body.is_empty()) {
            return Ok(value);
        }
    }

    Err(ExchangeError::HttpStatus {
        status,
        body: text.to_string(),
    })
}

impl ReqwestRest {
    pub fn new(
        base_url: String,
        exchange_name: String,
        signer: Option<Arc<dyn Signer>>,
    ) -> Result<Self, ExchangeError> {
        let config = RestClientConfig::new(base_url, exchange_name);
        let mut builder = RestClientBuilder::new(config);
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Current Unix time in milliseconds, used as the request nonce
    fn get_timestamp() -> Result<u64, ExchangeError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|e| ExchangeError::Preflight(format!("Failed to get timestamp: {}", e)))
    }

    fn check_query_string(method: &Method, query_string: &str) -> Result<(), ExchangeError> {
        if *method != Method::POST && query_string.contains('#') {
            return Err(ExchangeError::InvalidParameters(format!(
                "'#' is not allowed in query parameters: {}",
                query_string
            )));
        }
        Ok(())
    }

    fn build_url(&self, endpoint: &str, method: &Method, query_string: &str) -> String {
        let url = format!("{}{}", self.config.base_url, endpoint);
        if query_string.is_empty() || *method == Method::POST {
            url
        } else {
            format!("{}?{}", url, query_string)
        }
    }

    fn prepare_signed(
        &self,
        method: &Method,
        endpoint: &str,
        url: &str,
        query_string: &str,
        body: &str,
    ) -> Result<Request, ExchangeError> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(ExchangeError::AuthenticationRequired)?;

        let nonce = Self::get_timestamp()?;
        let headers = signer.sign_request(method.as_str(), endpoint, query_string, body, nonce)?;

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        for (key, value) in headers {
            request = request.header(key, value);
        }

        if *method != Method::GET {
            request = request.body(body.to_string());
        }

        request
            .build()
            .map_err(|e| ExchangeError::Preflight(format!("Failed to build request: {}", e)))
    }

    fn report_failure(&self, url: &str, data: &str, error: &ExchangeError) {
        match error {
            ExchangeError::ResponseProcessing(_) => self.logger.warn(&format!(
                "Error while processing response of request to {} with data {}: {}",
                url, data, error
            )),
            _ => self.logger.log(&format!(
                "Request to {} with data {} failed. {}.",
                url, data, error
            )),
        }
    }

    /// Make a request with the given parameters
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let query_string = create_query_string(params);
        let url = self.build_url(endpoint, &method, &query_string);

        let prepared = Self::check_query_string(&method, &query_string).and_then(|()| {
            if authenticated {
                serde_json::to_string(params)
                    .map_err(|e| ExchangeError::Preflight(format!("Failed to serialize body: {}", e)))
                    .and_then(|body| {
                        self.prepare_signed(&method, endpoint, &url, &query_string, &body)
                            .map(|request| (request, body))
                    })
            } else {
                self.client
                    .request(method.clone(), &url)
                    .build()
                    .map(|request| (request, query_string.clone()))
                    .map_err(|e| ExchangeError::Preflight(format!("Failed to build request: {}", e)))
            }
        });

        let (request, data) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                let error = match e {
                    ExchangeError::AuthenticationRequired | ExchangeError::Preflight(_) => e,
                    other => ExchangeError::Preflight(other.to_string()),
                };
                self.logger.log(&format!(
                    "Processing of request to {} failed. {}.",
                    url, error
                ));
                return Err(error);
            }
        };

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let error = ExchangeError::HttpError(e);
                self.report_failure(&url, &data, &error);
                return Err(error);
            }
        };

        let status = response.status();
        let text = response.text().await;

        let outcome = if status.is_success() {
            match text {
                Ok(text) => {
                    trace!("Response body: {}", text);
                    inspect_success_body(&text)
                }
                Err(e) => Err(ExchangeError::ResponseProcessing(e.to_string())),
            }
        } else {
            match text {
                Ok(text) => {
                    trace!(status = %status, "Error response body: {}", text);
                    inspect_failure_body(status.as_u16(), &text)
                }
                Err(e) => Err(ExchangeError::HttpError(e)),
            }
        };

        if let Err(error) = &outcome {
            self.report_failure(&url, &data, error);
        }

        outcome
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, param_count = params.len()))]
    async fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<Value, ExchangeError> {
        self.make_request(method, endpoint, params, true).await
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, param_count = params.len()))]
    async fn public_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<Value, ExchangeError> {
        self.make_request(method, endpoint, params, false).await
    }
}
