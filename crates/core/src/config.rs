//! TOML-based configuration system for Rollbook.

use crate::error::{Result, RollbookError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level Rollbook configuration, deserialized from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollbookConfig {
    pub rollbook: RollbookSection,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Core Rollbook instance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollbookSection {
    pub instance_name: String,
    pub data_dir: String,
    /// Directory for transient bulk-upload files. Defaults to `<data_dir>/uploads`.
    #[serde(default)]
    pub upload_dir: Option<String>,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseDriver::default_driver")]
    pub driver: DatabaseDriver,
    /// SQLite file path (used when driver = "sqlite").
    #[serde(default)]
    pub path: Option<String>,
    /// PostgreSQL connection URL (used when driver = "postgres").
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: DatabaseDriver::Sqlite,
            path: Some("/var/lib/rollbook/rollbook.db".into()),
            url: None,
        }
    }
}

/// Supported database drivers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseDriver {
    Sqlite,
    Postgres,
}

impl DatabaseDriver {
    fn default_driver() -> Self {
        Self::Sqlite
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

impl RollbookConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| RollbookError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Validate the configuration, returning an error for invalid combinations.
    pub fn validate(&self) -> Result<()> {
        if self.rollbook.instance_name.is_empty() {
            return Err(RollbookError::Config(
                "rollbook.instance_name must not be empty".into(),
            ));
        }

        if self.rollbook.data_dir.is_empty() {
            return Err(RollbookError::Config(
                "rollbook.data_dir must not be empty".into(),
            ));
        }

        match self.rollbook.database.driver {
            DatabaseDriver::Sqlite => {
                if self.rollbook.database.path.is_none() {
                    return Err(RollbookError::Config(
                        "rollbook.database.path is required when driver is sqlite".into(),
                    ));
                }
            }
            DatabaseDriver::Postgres => {
                if self.rollbook.database.url.is_none() {
                    return Err(RollbookError::Config(
                        "rollbook.database.url is required when driver is postgres".into(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Apply the two environment overrides the service documents:
    /// `DATABASE_URL` for the database location and `PORT` for the listener.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            match self.rollbook.database.driver {
                DatabaseDriver::Sqlite => {
                    let path = url.strip_prefix("sqlite:").unwrap_or(&url);
                    self.rollbook.database.path = Some(path.to_string());
                }
                DatabaseDriver::Postgres => {
                    self.rollbook.database.url = Some(url);
                }
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| RollbookError::Config(format!("invalid PORT value: {port}")))?;
        }

        Ok(())
    }

    /// Resolve the directory used for transient bulk-upload files.
    pub fn upload_dir(&self) -> PathBuf {
        match &self.rollbook.upload_dir {
            Some(dir) => PathBuf::from(dir),
            None => Path::new(&self.rollbook.data_dir).join("uploads"),
        }
    }

    pub fn generate_default() -> Self {
        Self {
            rollbook: RollbookSection {
                instance_name: "My Institution".into(),
                data_dir: "/var/lib/rollbook".into(),
                upload_dir: None,
                database: DatabaseConfig::default(),
            },
            server: ServerConfig::default(),
        }
    }
}
