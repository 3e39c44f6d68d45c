/// Configuration management for News Service
///
/// Everything is read from environment variables (after loading a `.env`
/// file when present). Database settings come from the shared `db-pool`
/// library.
use db_pool::env_utils::{env_non_empty, env_parse_or, env_string_or};
use db_pool::DbConfig;
use std::str::FromStr;
use std::time::Duration;

pub const SERVICE_NAME: &str = "news-service";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Record store selection and limits
    pub store: StoreConfig,
    /// Log output settings
    pub logging: LoggingConfig,
    /// MySQL pool settings
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Upper bound for a single store call
    pub timeout_ms: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MySql,
    /// Process-local store; contents are lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(StoreBackend::MySql),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "NEWS_STORE must be 'mysql' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let backend = match env_non_empty("NEWS_STORE") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::MySql,
        };
        let format = match env_non_empty("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Pretty,
        };

        Ok(Config {
            app: AppConfig {
                env: env_string_or("APP_ENV", "development"),
                host: env_string_or("NEWS_SERVICE_HOST", "0.0.0.0"),
                port: env_parse_or("PORT", 8080),
            },
            store: StoreConfig {
                backend,
                timeout_ms: env_parse_or("NEWS_STORE_TIMEOUT_MS", 5_000),
            },
            logging: LoggingConfig { format },
            database: DbConfig::from_env(SERVICE_NAME),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.app.host.clone(), self.app.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: &[&str] = &[
        "APP_ENV",
        "NEWS_SERVICE_HOST",
        "PORT",
        "NEWS_STORE",
        "NEWS_STORE_TIMEOUT_MS",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        for key in VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 8080));
        assert_eq!(config.store.backend, StoreBackend::MySql);
        assert_eq!(config.store.timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.database.service_name, SERVICE_NAME);
    }

    #[test]
    #[serial_test::serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "9090");
        std::env::set_var("NEWS_STORE", "Memory");
        std::env::set_var("NEWS_STORE_TIMEOUT_MS", "250");
        std::env::set_var("LOG_FORMAT", "json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 9090);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.timeout_ms, 250);
        assert_eq!(config.logging.format, LogFormat::Json);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 8080);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_unknown_store_backend_is_rejected() {
        clear_env();
        std::env::set_var("NEWS_STORE", "postgres");

        let err = Config::from_env().unwrap_err();
        assert!(err.contains("NEWS_STORE"));

        clear_env();
    }
}
