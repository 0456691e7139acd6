/// Configuration management for the workflow association store
///
/// Handles database connection settings. Values come from environment
/// variables so the same binary runs unchanged in containers.

use serde::{Deserialize, Serialize};

/// Environment variable holding the sqlx database URL
pub const DATABASE_URL_ENV: &str = "WORKFLOW_ASSOC_DATABASE_URL";
/// Environment variable holding the pool ceiling
pub const MAX_CONNECTIONS_ENV: &str = "WORKFLOW_ASSOC_MAX_CONNECTIONS";

const DEFAULT_DATABASE_URL: &str = "sqlite://workflow_assoc.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (e.g., "sqlite://workflow_assoc.db")
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for Config {
    /// Default configuration with ENV_VAR overrides
    fn default() -> Self {
        Self {
            database: DatabaseConfig::from_lookup(|key| std::env::var(key).ok()),
        }
    }
}

impl DatabaseConfig {
    /// Build settings from an arbitrary key lookup, falling back to defaults
    /// for missing or unparsable values.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup(DATABASE_URL_ENV).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup(MAX_CONNECTIONS_ENV)
                .and_then(|raw| raw.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}
