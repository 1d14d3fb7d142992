//! Unit-configuration labels and fixed field prefixes.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{IngestError, Result};

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"[-+]?[0-9]*\.[0-9]+|[0-9]+").expect("static regex is valid"))
}

/// Extract the first numeric token of a BHK field (`"2 BHK"` → `"2"`).
///
/// The token is returned verbatim as a label, so `"2.5 BHK"` yields `"2.5"`.
///
/// # Errors
/// [`IngestError::Normalize`] when the field holds no number at all; the
/// caller treats that as a failure of the whole listing.
pub fn extract_bhk(text: &str) -> Result<String> {
    number_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| IngestError::Normalize(format!("no numeric token in bhk field {text:?}")))
}

/// Remove every occurrence of `label` from `text` and trim the result.
///
/// `strip_prefix_label("Launched: Jan 2023", "Launched:")` → `"Jan 2023"`.
pub fn strip_prefix_label(text: &str, label: &str) -> String {
    text.replace(label, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bhk_integer() {
        assert_eq!(extract_bhk("2 BHK Apartment").unwrap(), "2");
        assert_eq!(extract_bhk("3BHK").unwrap(), "3");
    }

    #[test]
    fn test_bhk_decimal() {
        assert_eq!(extract_bhk("2.5 BHK").unwrap(), "2.5");
    }

    #[test]
    fn test_bhk_first_token_only() {
        assert_eq!(extract_bhk("4 BHK + 2 Study").unwrap(), "4");
    }

    #[test]
    fn test_bhk_stray_prefix_ignored() {
        assert_eq!(extract_bhk("z 1 RK").unwrap(), "1");
    }

    #[test]
    fn test_bhk_missing_number_is_error() {
        let err = extract_bhk("Studio").unwrap_err();
        assert!(matches!(err, IngestError::Normalize(_)));
        assert!(err.to_string().contains("Studio"));
    }

    #[test]
    fn test_bhk_non_ascii_digit_is_error() {
        assert!(matches!(extract_bhk("२ BHK"), Err(IngestError::Normalize(_))));
    }

    #[test]
    fn test_strip_launched() {
        assert_eq!(strip_prefix_label("Launched: Mar 2022", "Launched:"), "Mar 2022");
    }

    #[test]
    fn test_strip_possession_without_label() {
        assert_eq!(strip_prefix_label("  Dec 2026 ", "Possession:"), "Dec 2026");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_prefix_label("Possession:", "Possession:"), "");
    }
}
