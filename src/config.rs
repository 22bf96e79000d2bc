//! Configuration management for Proofread Viewer

use serde::Deserialize;
use std::env;

use crate::overlay::{ClassNames, EscapeStrategy, OverlayConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub overlay: OverlaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Naming scheme and escaping used for highlighted output
#[derive(Debug, Clone, Deserialize)]
pub struct OverlaySettings {
    pub class_prefix: String,
    pub suggestion_label: String,
    pub escape_strategy: EscapeStrategy,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite:./proofread.db".to_string(),
                max_connections: 5,
            },
            overlay: OverlaySettings {
                class_prefix: String::new(),
                suggestion_label: OverlayConfig::default().suggestion_label,
                escape_strategy: EscapeStrategy::default(),
            },
        }
    }
}

impl OverlaySettings {
    pub fn to_overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            classes: ClassNames::with_prefix(&self.class_prefix),
            suggestion_label: self.suggestion_label.clone(),
            escape_strategy: self.escape_strategy,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from a variable lookup, using defaults for
    /// anything unset
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&var, "SERVER_PORT")?.unwrap_or(defaults.server.port),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").unwrap_or(defaults.database.url),
                max_connections: parse_var(&var, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or(defaults.database.max_connections),
            },
            overlay: OverlaySettings {
                class_prefix: var("OVERLAY_CLASS_PREFIX").unwrap_or(defaults.overlay.class_prefix),
                suggestion_label: var("OVERLAY_SUGGESTION_LABEL")
                    .unwrap_or(defaults.overlay.suggestion_label),
                escape_strategy: parse_var(&var, "OVERLAY_ESCAPE_STRATEGY")?
                    .unwrap_or(defaults.overlay.escape_strategy),
            },
        })
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.server.port == 0 {
            problems.push("server port must not be 0".to_string());
        }
        if self.database.url.trim().is_empty() {
            problems.push("database url must not be empty".to_string());
        }
        if self.database.max_connections == 0 {
            problems.push("database max connections must be greater than 0".to_string());
        }
        if !self
            .overlay
            .class_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            problems.push(format!(
                "overlay class prefix may only contain [A-Za-z0-9_-]: {}",
                self.overlay.class_prefix
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match var(name) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidVar { name, value }),
        },
    }
}
