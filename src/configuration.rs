//! Normalized unit-configuration rows for one listing.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::listing::RawConfiguration;
use crate::normalize::{extract_area, extract_bhk, extract_currency};

/// One unit configuration after normalization. Becomes a `Property` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRow {
    pub bhk: String,
    pub min_builtup_area: i64,
    pub max_builtup_area: i64,
    pub min_carpet_area: i64,
    pub max_carpet_area: i64,
    pub min_price: i64,
    pub max_price: i64,
}

impl ConfigurationRow {
    /// Normalize a single sub-record.
    pub fn from_raw(raw: &RawConfiguration) -> Result<Self> {
        let bhk = extract_bhk(&raw.bhk)?;
        let builtup = extract_area(&raw.super_builtup_area)?;
        let carpet = extract_area(&raw.carpet_area)?;
        let price = extract_currency(&raw.price)?;

        Ok(Self {
            bhk,
            min_builtup_area: builtup.min,
            max_builtup_area: builtup.max,
            min_carpet_area: carpet.min,
            max_carpet_area: carpet.max,
            min_price: price.min,
            max_price: price.max,
        })
    }
}

/// Normalize every sub-record of a listing, preserving input order.
///
/// The first failing sub-record fails the whole sequence; rows that parsed
/// before it are discarded with it.
pub fn build_configuration_rows(configs: &[RawConfiguration]) -> Result<Vec<ConfigurationRow>> {
    configs.iter().map(ConfigurationRow::from_raw).collect()
}
