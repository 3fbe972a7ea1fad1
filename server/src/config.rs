//! Configuration management for the server.

use clientbook_core::{CsvOptions, ExportOptions, Locale};
use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Insert sample clients into an empty database at startup
    pub seed_sample_data: bool,
    /// Language of exports and API messages
    pub locale: Locale,
    /// Prefix CSV exports with a UTF-8 byte order mark
    pub csv_bom: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url: "sqlite://clients.db".to_string(),
            seed_sample_data: true,
            locale: Locale::En,
            csv_bom: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(raw) => parse_flag("SEED_SAMPLE_DATA", &raw)?,
            None => defaults.seed_sample_data,
        };

        let locale = match lookup("EXPORT_LOCALE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidLocale(raw))?,
            None => defaults.locale,
        };

        let csv_bom = match lookup("CSV_BOM") {
            Some(raw) => parse_flag("CSV_BOM", &raw)?,
            None => defaults.csv_bom,
        };

        Ok(Self {
            host,
            port,
            database_url,
            seed_sample_data,
            locale,
            csv_bom,
        })
    }

    /// Exporter settings derived from this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            locale: self.locale,
            csv: CsvOptions {
                byte_order_mark: self.csv_bom,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid EXPORT_LOCALE value: {0} (expected en or ru)")]
    InvalidLocale(String),

    #[error("Invalid {name} value: {value} (expected true or false)")]
    InvalidFlag { name: &'static str, value: String },
}
