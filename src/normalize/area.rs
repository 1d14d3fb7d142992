//! Area text (`650 - 900 sq.ft`) to integer ranges.

use regex::Regex;
use std::sync::OnceLock;

use super::NumericRange;
use crate::errors::{IngestError, Result};

static AREA_RE: OnceLock<Regex> = OnceLock::new();
static INTEGER_RE: OnceLock<Regex> = OnceLock::new();

fn area_re() -> &'static Regex {
    AREA_RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+(?:\s*-\s*[0-9]+)?)\s*sq\.?\s*ft").expect("static regex is valid")
    })
}

fn integer_re() -> &'static Regex {
    INTEGER_RE.get_or_init(|| Regex::new(r"[0-9]+").expect("static regex is valid"))
}

/// Parse the first `<n>[-<m>] sq ft` span in `text` into an area range.
///
/// No match gives `{0, 0}`; a single number gives `min == max`; a
/// hyphenated pair gives `{first, second}`. Only ASCII digits count as numbers.
///
/// # Errors
/// [`IngestError::Normalize`] when a number in the span is too large for an `i64`.
pub fn extract_area(text: &str) -> Result<NumericRange> {
    let Some(caps) = area_re().captures(text) else {
        return Ok(NumericRange::default());
    };
    let values = integer_re()
        .find_iter(&caps[1])
        .map(|m| {
            m.as_str()
                .parse::<i64>()
                .map_err(|e| IngestError::Normalize(format!("bad area {:?}: {e}", m.as_str())))
        })
        .collect::<Result<Vec<i64>>>()?;
    Ok(NumericRange::from_ordered(&values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_range() {
        assert_eq!(extract_area("650 - 900 sqft").unwrap(), NumericRange::new(650, 900));
    }

    #[test]
    fn test_single_with_dotted_unit() {
        assert_eq!(extract_area("1200 sq.ft").unwrap(), NumericRange::new(1200, 1200));
    }

    #[test]
    fn test_spaced_unit_and_case() {
        assert_eq!(extract_area("1,050 SQ FT").unwrap(), NumericRange::new(50, 50));
        assert_eq!(
            extract_area("980-1100 Sq. Ft.").unwrap(),
            NumericRange::new(980, 1100)
        );
    }

    #[test]
    fn test_no_unit_is_zero() {
        assert_eq!(extract_area("650 - 900").unwrap(), NumericRange::new(0, 0));
        assert_eq!(extract_area("N/A").unwrap(), NumericRange::new(0, 0));
        assert_eq!(extract_area("").unwrap(), NumericRange::new(0, 0));
    }

    #[test]
    fn test_first_span_wins() {
        assert_eq!(
            extract_area("Carpet 540 sqft, Built-up 720 sqft").unwrap(),
            NumericRange::new(540, 540)
        );
    }

    #[test]
    fn test_surrounding_text() {
        assert_eq!(
            extract_area("Super built-up: 1450 - 1600 sq.ft (approx)").unwrap(),
            NumericRange::new(1450, 1600)
        );
    }

    #[test]
    fn test_overflowing_number_is_error() {
        // The overflowing bound must not be dropped and let 900 slide into min.
        let err = extract_area("99999999999999999999 - 900 sqft").unwrap_err();
        assert!(matches!(err, IngestError::Normalize(_)));
        assert!(err.to_string().contains("99999999999999999999"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_areas() {
        assert_eq!(extract_area("१२०० sqft").unwrap(), NumericRange::new(0, 0));
    }
}
