use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::{Deserialize, Serialize};

use crate::domain::{ApiKeyRing, KeyRingError};

/// Origin allowed by CORS in production unless configured otherwise
pub const PRODUCTION_ORIGIN: &str = "https://your-domain.com";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub environment: Environment,
    pub docs: DocsConfig,
    pub database: DatabaseConfig,
    pub api_keys: ApiKeysConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

/// Interactive API documentation. Unset means "on in development only".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:...`, `postgres://...` or `memory`
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

/// Key values for each tier
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiKeysConfig {
    pub demo: String,
    pub ci_cd: String,
    pub admin: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./sql_app.db".to_string(),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl Default for ApiKeysConfig {
    fn default() -> Self {
        Self {
            demo: "demo-key-for-swagger-ui".to_string(),
            ci_cd: "cicd-pipeline-key".to_string(),
            admin: "admin-super-key".to_string(),
        }
    }
}

impl std::fmt::Debug for ApiKeysConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeysConfig")
            .field("demo", &"[REDACTED]")
            .field("ci_cd", &"[REDACTED]")
            .field("admin", &"[REDACTED]")
            .finish()
    }
}

impl ApiKeysConfig {
    /// Build the key ring, rejecting empty or duplicate keys
    pub fn key_ring(&self) -> Result<ApiKeyRing, KeyRingError> {
        ApiKeyRing::new(&self.demo, &self.ci_cd, &self.admin)
    }
}

impl AppConfig {
    /// Load configuration from files, `APP__*` variables and the flat
    /// variables `ENVIRONMENT`, `ENABLE_DOCS`, `DATABASE_URL`,
    /// `DEMO_API_KEY` (or `API_KEY`), `CICD_API_KEY` and `ADMIN_API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        apply_flat_env(builder, |name| std::env::var(name).ok())?
            .build()?
            .try_deserialize()
    }

    /// Build configuration from defaults and the flat variables only
    pub fn from_flat_env<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_flat_env(config::Config::builder(), lookup)?
            .build()?
            .try_deserialize()
    }

    pub fn docs_enabled(&self) -> bool {
        self.docs
            .enabled
            .unwrap_or(self.environment == Environment::Development)
    }

    pub fn cors_origins(&self) -> Vec<String> {
        if let Some(origins) = &self.cors.allowed_origins {
            return origins.clone();
        }

        match self.environment {
            Environment::Development => vec!["*".to_string()],
            Environment::Production => vec![PRODUCTION_ORIGIN.to_string()],
        }
    }
}

fn apply_flat_env<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let demo_key = lookup("DEMO_API_KEY").or_else(|| lookup("API_KEY"));

    builder
        .set_override_option(
            "environment",
            lookup("ENVIRONMENT").map(|v| v.trim().to_lowercase()),
        )?
        .set_override_option(
            "docs.enabled",
            lookup("ENABLE_DOCS").map(|v| v.trim().eq_ignore_ascii_case("true")),
        )?
        .set_override_option("database.url", lookup("DATABASE_URL"))?
        .set_override_option("api_keys.demo", demo_key)?
        .set_override_option("api_keys.ci_cd", lookup("CICD_API_KEY"))?
        .set_override_option("api_keys.admin", lookup("ADMIN_API_KEY"))
}
