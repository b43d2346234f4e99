//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>);
//!   an `https://` URL turns on secure session cookies
//! - `STOREFRONT_CATALOG_PATH` - Product catalog JSON
//!   (default: `crates/storefront/content/products.json`)
//! - `STOREFRONT_STATIC_DIR` - Static assets (default: `crates/storefront/static`)
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` URL for persistent sessions;
//!   sessions are kept in memory when unset
//! - `STOREFRONT_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where visitor sessions live.
#[derive(Debug, Clone)]
pub enum SessionBackend {
    /// In-process memory; lost on restart.
    Memory,
    /// `PostgreSQL` via tower-sessions-sqlx-store.
    Postgres { database_url: SecretString },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Product catalog file
    pub catalog_path: PathBuf,
    /// Static asset directory
    pub static_dir: PathBuf,
    /// Session storage backend
    pub sessions: SessionBackend,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            catalog_path: PathBuf::from("crates/storefront/content/products.json"),
            static_dir: PathBuf::from("crates/storefront/static"),
            sessions: SessionBackend::Memory,
            log_format: LogFormat::Pretty,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env_or("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_optional_env("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_BASE_URL".to_string(),
                "must start with http:// or https://".to_string(),
            ));
        }
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH")
            .map_or(defaults.catalog_path, PathBuf::from);
        let static_dir =
            get_optional_env("STOREFRONT_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);
        let sessions = get_optional_env("STOREFRONT_DATABASE_URL").map_or(
            SessionBackend::Memory,
            |url| SessionBackend::Postgres {
                database_url: SecretString::from(url),
            },
        );
        let log_format = parse_env_or("STOREFRONT_LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            static_dir,
            sessions,
            log_format,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(!config.is_secure());
        assert!(matches!(config.sessions, SessionBackend::Memory));
    }

    #[test]
    fn test_is_secure_for_https() {
        let config = StorefrontConfig {
            base_url: "https://lushpetals.example".to_string(),
            ..StorefrontConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_value_port() {
        let port: u16 = parse_value("STOREFRONT_PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_value_reports_variable() {
        let err = parse_value::<u16>("STOREFRONT_PORT", "eighty").unwrap_err();
        let ConfigError::InvalidEnvVar(key, _) = err;
        assert_eq!(key, "STOREFRONT_PORT");
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_session_backend_debug_redacts_url() {
        let backend = SessionBackend::Postgres {
            database_url: SecretString::from("postgres://user:hunter2@db/lush"),
        };
        let debug_output = format!("{backend:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
