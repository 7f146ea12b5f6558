//! Application configuration

mod app_config;

pub use app_config::{
    ApiKeysConfig, AppConfig, CorsConfig, DatabaseConfig, DocsConfig, Environment, LogFormat,
    LoggingConfig, ServerConfig,
};
