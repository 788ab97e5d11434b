//! Desk configuration.
//!
//! The landing bundle compiles in `site.toml`; anything missing or malformed
//! falls back to the defaults below.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Storage key the site has always written inquiries under.
pub const DEFAULT_STORAGE_KEY: &str = "contactSubmissions";

/// Simulated network latency for a submission.
pub const DEFAULT_LATENCY_MS: u64 = 1500;

/// Root of `site.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub desk: DeskConfig,
}

/// Settings for [`ContactDesk`](crate::desk::ContactDesk).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Key holding the JSON array of inquiries
    pub storage_key: String,
    /// Artificial delay before a submission is stored, in milliseconds
    pub latency_ms: u64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl DeskConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl SiteConfig {
    /// Strict parse; callers that want the fallback use [`SiteConfig::load_str`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(content)?;
        if config.desk.storage_key.trim().is_empty() {
            config.desk.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        Ok(config)
    }

    /// Parse `content`, returning defaults if it is not valid TOML.
    pub fn load_str(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "failed to parse site config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.desk.storage_key, "contactSubmissions");
        assert_eq!(config.desk.latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
[desk]
latency_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.desk.latency_ms, 250);
        assert_eq!(config.desk.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_blank_storage_key_falls_back() {
        let config = SiteConfig::from_toml_str("[desk]\nstorage_key = \"  \"\n").unwrap();
        assert_eq!(config.desk.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        assert!(SiteConfig::from_toml_str("[desk\nlatency_ms = ").is_err());
        assert_eq!(SiteConfig::load_str("[desk\nlatency_ms = "), SiteConfig::default());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = SiteConfig::from_toml_str("[desk]\nlatency_ms = \"slow\"\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid desk config"));
    }

    #[test]
    fn test_builders() {
        let config = DeskConfig::default()
            .with_latency(Duration::from_millis(10))
            .with_storage_key("inquiries");
        assert_eq!(config.latency_ms, 10);
        assert_eq!(config.storage_key, "inquiries");
    }
}
