use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::core::logging::Logger;
use crate::exchanges::latoken::{connector::LatokenConnector, signer::LatokenSigner};
use std::sync::Arc;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Builder for creating LATOKEN connectors
#[derive(Debug, Clone)]
pub struct LatokenBuilder {
    config: ExchangeConfig,
    rest_timeout: u64,
}

impl Default for LatokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LatokenBuilder {
    /// Public-only builder with the default base URL
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(),
            rest_timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Set the exchange configuration
    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials
    pub fn with_credentials(mut self, api_key: String, secret_key: String) -> Self {
        let base_url = self.config.base_url.clone();
        let logger = Arc::clone(&self.config.logger);
        self.config = ExchangeConfig::new(api_key, secret_key)
            .base_url(base_url)
            .logger(logger);
        self
    }

    /// Set base URL for REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = base_url;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = logger;
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    /// Build only the transport. A signer is attached when credentials are present.
    pub fn build_rest_client(&self) -> Result<ReqwestRest, ExchangeError> {
        let rest_config = RestClientConfig::new(self.config.base_url.clone(), "latoken".to_string())
            .with_timeout(self.rest_timeout);

        let mut rest_builder =
            RestClientBuilder::new(rest_config).with_logger(Arc::clone(&self.config.logger));

        if self.config.has_credentials() {
            let signer = Arc::new(LatokenSigner::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            ));
            rest_builder = rest_builder.with_signer(signer);
        }

        rest_builder.build()
    }

    pub fn build(self) -> Result<LatokenConnector<ReqwestRest>, ExchangeError> {
        let rest = self.build_rest_client()?;
        Ok(LatokenConnector::new(rest, self.config, self.rest_timeout))
    }
}

/// Create a LATOKEN connector from a configuration
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<LatokenConnector<ReqwestRest>, ExchangeError> {
    LatokenBuilder::new().with_config(config).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_BASE_URL;

    #[test]
    fn test_build_without_credentials() {
        let connector = build_connector(ExchangeConfig::read_only()).unwrap();
        assert!(!connector.rest_client().has_signer());
        assert_eq!(connector.rest_client().config().base_url, DEFAULT_BASE_URL);
        assert_eq!(connector.rest_client().config().timeout_seconds, 10);
    }

    #[test]
    fn test_build_with_credentials_attaches_signer() {
        let connector = LatokenBuilder::new()
            .with_base_url("https://sandbox.example".to_string())
            .with_credentials("key".to_string(), "secret".to_string())
            .build()
            .unwrap();

        assert!(connector.rest_client().has_signer());
        assert_eq!(
            connector.rest_client().config().base_url,
            "https://sandbox.example"
        );
    }

    #[test]
    fn test_rest_timeout_override() {
        let connector = LatokenBuilder::new().with_rest_timeout(3).build().unwrap();
        assert_eq!(connector.rest_client().config().timeout_seconds, 3);
    }
}
