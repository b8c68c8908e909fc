use std::time::Duration;

use weatherdesk_openmeteo::api::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL};
use weatherdesk_openmeteo::OpenMeteoConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://weather.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Open-Meteo endpoints and per-request timeouts.
    pub open_meteo: OpenMeteoConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                   |
    /// |--------------------------|-------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                 |
    /// | `PORT`                   | `3000`                                    |
    /// | `DATABASE_URL`           | `sqlite://weather.db`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`                   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                      |
    /// | `GEOCODING_URL`          | `https://geocoding-api.open-meteo.com/v1` |
    /// | `FORECAST_URL`           | `https://api.open-meteo.com/v1`           |
    /// | `GEOCODING_TIMEOUT_SECS` | `5`                                       |
    /// | `FORECAST_TIMEOUT_SECS`  | `10`                                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "3000"))?;
        let database_url = var("DATABASE_URL", "sqlite://weather.db");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
        )?;

        let geocoding_timeout_secs: u64 = parse_var(
            "GEOCODING_TIMEOUT_SECS",
            var("GEOCODING_TIMEOUT_SECS", "5"),
        )?;
        let forecast_timeout_secs: u64 = parse_var(
            "FORECAST_TIMEOUT_SECS",
            var("FORECAST_TIMEOUT_SECS", "10"),
        )?;

        let open_meteo = OpenMeteoConfig {
            geocoding_url: var("GEOCODING_URL", DEFAULT_GEOCODING_URL),
            forecast_url: var("FORECAST_URL", DEFAULT_FORECAST_URL),
            geocoding_timeout: Duration::from_secs(geocoding_timeout_secs),
            forecast_timeout: Duration::from_secs(forecast_timeout_secs),
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            open_meteo,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
