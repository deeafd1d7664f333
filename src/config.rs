//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/chargego/config.toml`,
//! overridable via the `CHARGEGO_CONFIG` environment variable). Every
//! section has working defaults so the service starts without a file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST API bind host
    pub api_host: String,
    /// REST API bind port
    pub api_port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite database file path (ignored when `url` is set)
    pub path: String,
    /// Full connection URL; takes precedence over `path`
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, e.g. "info" or "chargego=debug,info"
    pub level: String,
}

/// Background sweep settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// How often overdue reservations are expired, in seconds
    pub reservation_expiry_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: "./chargego.db".to_string(),
            url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            reservation_expiry_interval_secs: 30,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseSection::default(),
            logging: LoggingConfig::default(),
            sweep: SweepConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let cfg = toml::from_str(&raw)?;
        Ok(cfg)
    }
}

impl DatabaseSection {
    /// Resolve the SeaORM connection URL
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

/// Default config file location: `~/.config/chargego/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chargego")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.sweep.reservation_expiry_interval_secs, 30);
        assert_eq!(
            cfg.database.connection_url(),
            "sqlite://./chargego.db?mode=rwc"
        );
    }

    #[test]
    fn explicit_url_wins_over_path() {
        let db = DatabaseSection {
            path: "./x.db".into(),
            url: Some("postgres://localhost/chargego".into()),
        };
        assert_eq!(db.connection_url(), "postgres://localhost/chargego");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
    }
}
