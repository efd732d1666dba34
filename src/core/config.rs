use crate::core::logging::{Logger, TracingLogger};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://api.latoken.com";

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: String,
    pub logger: Arc<dyn Logger>,
}

/// Partial update applied by [`ExchangeConfig::configure`]
///
/// Absent fields keep their current value, except credentials: unless
/// `public_only` is set, both keys are overwritten (a missing key becomes
/// empty).
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub logger: Option<Arc<dyn Logger>>,
    pub public_only: bool,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn credentials(mut self, api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn public_only(mut self, public_only: bool) -> Self {
        self.public_only = public_only;
        self
    }
}

// Never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 3)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            #[serde(default)]
            api_key: String,
            #[serde(default)]
            secret_key: String,
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        let mut config = Self::new(helper.api_key, helper.secret_key);
        if let Some(base_url) = helper.base_url {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::read_only()
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials and the default base URL
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` (e.g., `LATOKEN_API_KEY`)
    /// - `{PREFIX}_SECRET_KEY` (e.g., `LATOKEN_SECRET_KEY`)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let prefix = exchange_prefix.to_uppercase();
        let api_key_var = format!("{}_API_KEY", prefix);
        let secret_key_var = format!("{}_SECRET_KEY", prefix);
        let base_url_var = format!("{}_BASE_URL", prefix);

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let mut config = Self::new(api_key, secret_key);
        if let Ok(base_url) = env::var(&base_url_var) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Load a `.env` file (if present) and then read the environment
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(exchange_prefix, ".env")
    }

    /// Same as [`Self::from_env_file`] with a custom file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(
        exchange_prefix: &str,
        env_file_path: &str,
    ) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Configuration for public endpoints only
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Check if this configuration has credentials for signed operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Replace the logger
    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Apply a partial configuration update. Safe to call repeatedly.
    pub fn configure(&mut self, update: ConfigUpdate) {
        if let Some(base_url) = update.base_url.filter(|url| !url.is_empty()) {
            self.base_url = base_url;
        }

        if let Some(logger) = update.logger {
            self.logger = logger;
        }

        if !update.public_only {
            self.api_key = Secret::new(update.api_key.unwrap_or_default());
            self.secret_key = Secret::new(update.secret_key.unwrap_or_default());
        }
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_without_base_url_keeps_url_and_replaces_credentials() {
        let mut config = ExchangeConfig::new("old_key".to_string(), "old_secret".to_string())
            .base_url("https://custom.example".to_string());

        config.configure(ConfigUpdate::new().credentials("new_key", "new_secret"));

        assert_eq!(config.base_url, "https://custom.example");
        assert_eq!(config.api_key(), "new_key");
        assert_eq!(config.secret_key(), "new_secret");
    }

    #[test]
    fn test_configure_public_only_leaves_credentials() {
        let mut config = ExchangeConfig::new("key".to_string(), "secret".to_string());

        config.configure(
            ConfigUpdate::new()
                .base_url("https://other.example")
                .credentials("ignored", "ignored")
                .public_only(true),
        );

        assert_eq!(config.base_url, "https://other.example");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.secret_key(), "secret");
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut config = ExchangeConfig::read_only();
        let update = ConfigUpdate::new()
            .base_url("https://api.example")
            .credentials("k", "s");

        config.configure(update.clone());
        config.configure(update);

        assert_eq!(config.base_url, "https://api.example");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_configure_without_keys_clears_credentials() {
        let mut config = ExchangeConfig::new("key".to_string(), "secret".to_string());
        config.configure(ConfigUpdate::new());
        assert!(!config.has_credentials());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_serialization_redacts_secrets() {
        let config = ExchangeConfig::new("visible_key".to_string(), "visible_secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("[REDACTED]"));
        assert!(!json.contains("visible_key"));
        assert!(!json.contains("visible_secret"));
    }

    #[test]
    fn test_deserialize_defaults_base_url() {
        let config: ExchangeConfig =
            serde_json::from_str(r#"{"api_key":"a","secret_key":"b"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_read_only_has_no_credentials() {
        assert!(!ExchangeConfig::read_only().has_credentials());
    }
}
