//! Configuration for the pricing report

use core_config::FromEnv;
use domain_catalog::CatalogClientConfig;
use eyre::{Result, WrapErr};

pub use core_config::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub catalog: CatalogClientConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let catalog =
            <CatalogClientConfig as FromEnv>::from_env().wrap_err("Invalid catalog configuration")?;

        Ok(Self {
            environment: Environment::from_env(),
            catalog,
        })
    }

    /// Apply a `--base-url` given on the command line
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.catalog.base_url = base_url;
        }
        self
    }
}
