//! PropertyNode — one unit configuration of a project.

use serde::{Deserialize, Serialize};

use crate::configuration::ConfigurationRow;

/// A unit configuration (e.g. the 2 BHK variant) of a project.
///
/// Property nodes carry no natural key. Each ingestion creates new ones, so
/// re-ingesting a listing duplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNode {
    /// Bedroom-hall-kitchen label, kept as the token found in the text.
    pub bhk: String,
    /// Sale price bounds in rupees.
    pub min_price: i64,
    pub max_price: i64,
    /// Super built-up area bounds in square feet.
    pub min_builtup_area: i64,
    pub max_builtup_area: i64,
    /// Carpet area bounds in square feet.
    pub min_carpet_area: i64,
    pub max_carpet_area: i64,
}

impl PropertyNode {
    /// Graph label used in Cypher.
    pub const LABEL: &'static str = "Property";
}

impl From<&ConfigurationRow> for PropertyNode {
    fn from(row: &ConfigurationRow) -> Self {
        Self {
            bhk: row.bhk.clone(),
            min_price: row.min_price,
            max_price: row.max_price,
            min_builtup_area: row.min_builtup_area,
            max_builtup_area: row.max_builtup_area,
            min_carpet_area: row.min_carpet_area,
            max_carpet_area: row.max_carpet_area,
        }
    }
}
