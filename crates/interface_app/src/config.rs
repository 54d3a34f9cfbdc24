//! Application configuration

use domain_documents::ListingClientConfig;
use serde::Deserialize;
use std::collections::HashMap;

/// Environment variable prefix, e.g. `FACTURA_API_BASE_URL`
pub const ENV_PREFIX: &str = "FACTURA";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the invoicing service
    pub api_base_url: String,
    /// Bearer token for the invoicing service
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Documents per page in the home feed
    pub page_size: u32,
    /// Log level or filter directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            api_token: None,
            request_timeout_secs: 30,
            page_size: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from environment, falling back to defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::build(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit set of variables instead of the
    /// process environment. Keys carry the prefix, as in the environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::build(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("page_size", i64::from(defaults.page_size))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Settings for the REST listing adapter
    pub fn listing_config(&self) -> ListingClientConfig {
        ListingClientConfig {
            base_url: self.api_base_url.clone(),
            bearer_token: self.api_token.clone().filter(|token| !token.trim().is_empty()),
            timeout_secs: self.request_timeout_secs,
        }
    }
}
