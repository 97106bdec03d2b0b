/// Configuration management for the cutecats core
use crate::error::{CatError, CatResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote catalog API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog service
    pub base_url: String,
    /// API key sent as the `x-api-key` header
    pub api_key: String,
    /// Number of records requested per page
    pub page_size: u32,
    /// User-Agent header for HTTP requests
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_directory: PathBuf,
    pub database: PathBuf,
    pub uploads_directory: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> CatResult<Self> {
        dotenv::dotenv().ok();

        let base_url = env::var("CAT_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.thecatapi.com".to_string());
        let api_key = env::var("CAT_API_KEY")
            .map_err(|_| CatError::Validation("CAT_API_KEY is required".to_string()))?;
        let page_size = env::var("CAT_API_PAGE_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .unwrap_or(20);
        let user_agent = env::var("CAT_API_USER_AGENT")
            .unwrap_or_else(|_| format!("cutecats/{}", env!("CARGO_PKG_VERSION")));
        let request_timeout_secs = env::var("CAT_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let data_directory: PathBuf = env::var("CAT_DATA_DIRECTORY")
            .unwrap_or_else(|_| "./data".to_string())
            .into();
        let database = env::var("CAT_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_directory.join("cutecats.sqlite"));
        let uploads_directory = env::var("CAT_UPLOADS_DIRECTORY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_directory.join("uploads"));

        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(AppConfig {
            api: ApiConfig {
                base_url,
                api_key,
                page_size,
                user_agent,
                request_timeout_secs,
            },
            storage: StorageConfig {
                data_directory,
                database,
                uploads_directory,
            },
            logging: LoggingConfig { level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> CatResult<()> {
        if self.api.base_url.is_empty() {
            return Err(CatError::Validation("API base URL cannot be empty".to_string()));
        }

        if self.api.api_key.is_empty() {
            return Err(CatError::Validation("API key cannot be empty".to_string()));
        }

        if self.api.page_size == 0 {
            return Err(CatError::Validation("Page size must be positive".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            api: ApiConfig {
                base_url: "https://api.thecatapi.com".to_string(),
                api_key: "test-key".to_string(),
                page_size: 20,
                user_agent: "cutecats/test".to_string(),
                request_timeout_secs: 10,
            },
            storage: StorageConfig {
                data_directory: "./data".into(),
                database: "./data/cutecats.sqlite".into(),
                uploads_directory: "./data/uploads".into(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let mut config = valid_config();
        config.api.api_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = valid_config();
        config.api.page_size = 0;
        assert!(config.validate().is_err());
    }
}
