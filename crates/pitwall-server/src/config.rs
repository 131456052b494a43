//! Server configuration
//!
//! Read once at startup from the Shuttle secret store (`Secrets.toml`
//! locally). Missing keys fall back to defaults; unknown values are fatal.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use pitwall::ValidationMode;

/// Which TeamRepository backs the service
pub const STORE_KEY: &str = "TEAMS_STORE";
/// `strict` or `legacy`, see [`ValidationMode`]
pub const VALIDATION_MODE_KEY: &str = "TEAMS_VALIDATION_MODE";

/// Team store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Postgres => write!(f, "postgres"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub store: StoreBackend,
    pub validation_mode: ValidationMode,
}

impl ServerConfig {
    /// Build the configuration from any key lookup (secret store, env, map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            store: read_or_default(&lookup, STORE_KEY)?,
            validation_mode: read_or_default(&lookup, VALIDATION_MODE_KEY)?,
        })
    }
}

fn read_or_default<T, F>(lookup: &F, key: &str) -> Result<T>
where
    T: FromStr<Err = String> + Default + Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|e| anyhow!("Invalid {}: {}", key, e)),
        None => {
            let value = T::default();
            tracing::warn!("⚠️  No {} set - using {}", key, value);
            Ok(value)
        }
    }
}
