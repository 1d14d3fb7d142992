//! Run configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default location of the scraped listings file.
pub const DEFAULT_INPUT_PATH: &str = "data/realestate_data.json";

/// Connection and input settings loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngestConfig {
    /// Neo4j connection URI (e.g. `bolt://localhost:7687`).
    #[validate(length(min = 1))]
    pub neo4j_uri: String,

    /// Neo4j username.
    #[validate(length(min = 1))]
    pub neo4j_username: String,

    /// Neo4j password.
    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub neo4j_password: String,

    /// Target database name.
    #[validate(length(min = 1))]
    pub neo4j_database: String,

    /// Path of the JSON listings file.
    #[validate(length(min = 1))]
    pub input_path: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            neo4j_uri: "bolt://localhost:7687".to_string(),
            neo4j_username: "neo4j".to_string(),
            neo4j_password: String::new(),
            neo4j_database: "neo4j".to_string(),
            input_path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first (non-fatal if `.env` is absent).
    /// `NEO4J_PASSWORD` is required; `NEO4J_URI`, `NEO4J_USERNAME`,
    /// `NEO4J_DATABASE` and `REALESTATE_DATA_PATH` fall back to defaults.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, applying defaults and validation.
    pub fn from_vars<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let neo4j_password = lookup("NEO4J_PASSWORD").ok_or_else(|| {
            crate::IngestError::Validation("NEO4J_PASSWORD is required".to_string())
        })?;

        let config = Self {
            neo4j_uri: lookup("NEO4J_URI").unwrap_or(defaults.neo4j_uri),
            neo4j_username: lookup("NEO4J_USERNAME").unwrap_or(defaults.neo4j_username),
            neo4j_password,
            neo4j_database: lookup("NEO4J_DATABASE").unwrap_or(defaults.neo4j_database),
            input_path: lookup("REALESTATE_DATA_PATH").unwrap_or(defaults.input_path),
        };

        config
            .validate()
            .map_err(|e| crate::IngestError::Validation(e.to_string()))?;

        Ok(config)
    }
}
