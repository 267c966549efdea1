use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Builds the configuration from raw variable values, `None` meaning unset.
    pub fn from_values(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, AppError> {
        let port = match port {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    reason: e.to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: normalize_database_url(database_url),
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rewrites the legacy `postgres://` scheme to `postgresql://` and falls back to a
/// local SQLite file when no connection string is supplied.
pub fn normalize_database_url(database_url: Option<String>) -> String {
    match database_url {
        Some(url) => match url.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{}", rest),
            None => url,
        },
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}
