use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, DEFAULT_PAGE_LIMIT, SESSION_STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub default_page_size: u32,
    pub session_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: BACKEND_URL.to_string(),
            backend_url_production: "https://api.estate.example".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            default_page_size: DEFAULT_PAGE_LIMIT,
            session_storage_key: SESSION_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size: &u32| *size > 0)
                .unwrap_or(defaults.default_page_size),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
        }
    }

    /// Backend base URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
