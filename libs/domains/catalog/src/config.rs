use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote catalog
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl CatalogClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl FromEnv for CatalogClientConfig {
    /// Reads from environment variables with sensible defaults:
    /// - CATALOG_BASE_URL: defaults to https://dummyjson.com
    /// - CATALOG_TIMEOUT_SECS: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("CATALOG_BASE_URL", DEFAULT_BASE_URL);
        if base_url.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "CATALOG_BASE_URL".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        let timeout_secs: u64 =
            env_parse("CATALOG_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url: base_url.trim().to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            ..Self::default()
        })
    }
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("catalog-pricing/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("CATALOG_BASE_URL", None::<&str>),
                ("CATALOG_TIMEOUT_SECS", None::<&str>),
            ],
            || {
                let config = CatalogClientConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://dummyjson.com");
                assert_eq!(config.request_timeout, Duration::from_secs(10));
                assert!(config.user_agent.starts_with("catalog-pricing/"));
            },
        );
    }

    #[test]
    fn test_config_from_env_with_overrides() {
        temp_env::with_vars(
            [
                ("CATALOG_BASE_URL", Some("http://localhost:4000")),
                ("CATALOG_TIMEOUT_SECS", Some("3")),
            ],
            || {
                let config = CatalogClientConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:4000");
                assert_eq!(config.request_timeout, Duration::from_secs(3));
            },
        );
    }

    #[test]
    fn test_config_from_env_invalid_timeout() {
        temp_env::with_var("CATALOG_TIMEOUT_SECS", Some("soon"), || {
            let err = CatalogClientConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CATALOG_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_config_from_env_empty_base_url() {
        temp_env::with_var("CATALOG_BASE_URL", Some("  "), || {
            let err = CatalogClientConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CATALOG_BASE_URL"));
        });
    }

    #[test]
    fn test_config_builders() {
        let config =
            CatalogClientConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(250));
        assert_eq!(config.base_url, "http://127.0.0.1:9");
        assert_eq!(config.request_timeout, Duration::from_millis(250));
    }
}
