use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub tiingo_api_key: String,
    pub static_dir: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let app_env_str = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // Tiingo config. An empty key is allowed; upstream calls will then
        // fail authentication and surface as a lookup failure.
        let tiingo_api_key = env::var("TIINGO_API_KEY").unwrap_or_default();

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        Ok(Self {
            port,
            host,
            app_env,
            tiingo_api_key,
            static_dir,
        })
    }
}
