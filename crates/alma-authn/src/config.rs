//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

fn default_timeout() -> u64 {
    10
}

/// Connection settings for the Alma user API.
///
/// Loaded once at startup and handed to the verifier; the verifier never
/// consults the environment itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlmaConfig {
    /// Base URL of the Alma REST API (e.g. `https://api-na.hosted.exlibrisgroup.com/almaws/v1`).
    #[serde(default)]
    pub api_root: String,

    /// API key authorizing access to the users endpoint.
    #[serde(default)]
    pub api_key: String,

    /// Connect and total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for AlmaConfig {
    fn default() -> Self {
        Self {
            api_root: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AlmaConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `ALMA_API_ROOT` | Base URL of the Alma REST API |
    /// | `ALMA_APIKEY` | API key for the users endpoint |
    /// | `ALMA_TIMEOUT_SECS` | Request timeout in seconds (default: 10) |
    pub fn from_env() -> Self {
        Self {
            api_root: std::env::var("ALMA_API_ROOT").unwrap_or_default(),
            api_key: std::env::var("ALMA_APIKEY").unwrap_or_default(),
            timeout_secs: std::env::var("ALMA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the API root URL.
    pub fn with_api_root(mut self, url: impl Into<String>) -> Self {
        self.api_root = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validate the config and return the parsed API root.
    ///
    /// Both `api_root` and `api_key` must be non-empty before any call is
    /// attempted; absence is a deployment defect, not a verification
    /// outcome.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.api_root.trim().is_empty() {
            return Err(ConfigError::MissingApiRoot);
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        // Normalize the trailing slash so path segments append cleanly.
        let normalized = format!("{}/", self.api_root.trim_end_matches('/'));
        let root = Url::parse(&normalized).map_err(|e| ConfigError::InvalidApiRoot {
            reason: e.to_string(),
        })?;

        if root.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiRoot {
                reason: "URL cannot be a base".to_string(),
            });
        }

        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = AlmaConfig::default()
            .with_api_root("https://alma.example.edu/almaws/v1")
            .with_api_key("l8xx-secret")
            .with_timeout_secs(5);

        assert_eq!(config.api_root, "https://alma.example.edu/almaws/v1");
        assert_eq!(config.api_key, "l8xx-secret");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn validate_rejects_empty_api_root() {
        let config = AlmaConfig::default().with_api_key("key");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiRoot)
        ));
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let config = AlmaConfig::default().with_api_root("https://alma.example.edu/v1");
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn validate_rejects_unparseable_root() {
        let config = AlmaConfig::default()
            .with_api_root("not a url")
            .with_api_key("key");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidApiRoot { .. })
        ));
    }

    #[test]
    fn validate_normalizes_trailing_slash() {
        let with_slash = AlmaConfig::default()
            .with_api_root("https://alma.example.edu/almaws/v1/")
            .with_api_key("key");
        let without = AlmaConfig::default()
            .with_api_root("https://alma.example.edu/almaws/v1")
            .with_api_key("key");

        assert_eq!(
            with_slash.validate().unwrap().as_str(),
            without.validate().unwrap().as_str()
        );
    }

    #[test]
    fn default_timeout_is_finite() {
        assert_eq!(AlmaConfig::default().timeout_secs, 10);
    }
}
