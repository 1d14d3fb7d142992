//! Raw listing records as scraped, and loading them from disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{IngestError, Result};

/// One unit-configuration sub-record of a listing, all free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfiguration {
    pub bhk: String,
    pub super_builtup_area: String,
    pub carpet_area: String,
    pub price: String,
}

/// A scraped listing record.
///
/// `builder` holds both developer and location (`By X in Y`); `launched` and
/// `possession` still carry their `Launched:` / `Possession:` labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub project: String,
    pub builder: String,
    pub launched: String,
    pub possession: String,
    pub config: Vec<RawConfiguration>,
}

impl RawListing {
    /// Decode one element of the input array.
    ///
    /// # Errors
    /// [`IngestError::MalformedListing`] when a key is missing or has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(IngestError::MalformedListing)
    }
}

/// Parse input text into its listing records, in input order.
///
/// Records are left undecoded so a single malformed listing can be skipped
/// later without rejecting the whole file.
///
/// # Errors
/// [`IngestError::InvalidInput`] for text that is not JSON and
/// [`IngestError::InputShape`] when the top level is not an array.
pub fn parse_listings(text: &str) -> Result<Vec<serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(IngestError::InvalidInput)?;
    match value {
        serde_json::Value::Array(records) => Ok(records),
        other => Err(IngestError::InputShape(json_kind(&other).to_string())),
    }
}

/// Read and parse the input file.
///
/// # Errors
/// [`IngestError::InputNotFound`] / [`IngestError::InputIo`] when the file
/// cannot be read, plus everything [`parse_listings`] returns.
pub async fn load_listings(path: &Path) -> Result<Vec<serde_json::Value>> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::InputIo {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_listings(&text)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "project": "Skyline Towers",
            "builder": "By ABC Builders in Pune",
            "launched": "Launched: Jan 2023",
            "possession": "Possession: Dec 2026",
            "config": [
                {
                    "bhk": "2 BHK",
                    "super_builtup_area": "1100 sq.ft",
                    "carpet_area": "750 sqft",
                    "price": "85L"
                }
            ]
        })
    }

    #[test]
    fn test_listing_from_value() {
        let listing = RawListing::from_value(sample()).expect("valid listing");
        assert_eq!(listing.project, "Skyline Towers");
        assert_eq!(listing.config.len(), 1);
        assert_eq!(listing.config[0].price, "85L");
    }

    #[test]
    fn test_listing_missing_key() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("config");
        let err = RawListing::from_value(value).unwrap_err();
        assert!(matches!(err, IngestError::MalformedListing(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_parse_keeps_order_and_bad_records() {
        let text = r#"[{"project": "A"}, 42, {"project": "C"}]"#;
        let records = parse_listings(text).expect("valid array");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["project"], "A");
        assert_eq!(records[2]["project"], "C");
    }

    #[test]
    fn test_parse_invalid_json_is_fatal() {
        let err = parse_listings("[{\"project\": ").unwrap_err();
        assert!(matches!(err, IngestError::InvalidInput(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_parse_non_array_is_fatal() {
        let err = parse_listings(r#"{"project": "A"}"#).unwrap_err();
        assert!(matches!(err, IngestError::InputShape(ref kind) if kind == "an object"));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.json");
        let err = load_listings(&path).await.unwrap_err();
        assert!(matches!(err, IngestError::InputNotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("listings.json");
        std::fs::write(&path, json!([sample(), sample()]).to_string()).expect("write input");
        let records = load_listings(&path).await.expect("load listings");
        assert_eq!(records.len(), 2);
    }
}
