use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
}

/// Connection settings for the remote bills store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            store: StoreConfig {
                base_url: env::var("STORE_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5678".to_string()),
                request_timeout_secs: env::var("STORE_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid STORE_REQUEST_TIMEOUT_SECS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.base_url.is_empty() {
            return Err(AppError::Configuration(
                "STORE_BASE_URL must not be empty".to_string(),
            ));
        }

        if !self.store.base_url.starts_with("http://")
            && !self.store.base_url.starts_with("https://")
        {
            return Err(AppError::Configuration(
                "STORE_BASE_URL must be an http(s) URL".to_string(),
            ));
        }

        if self.store.request_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Store request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
