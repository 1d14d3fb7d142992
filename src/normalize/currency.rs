//! Price text in Crore / Lakh units to integer rupee ranges.

use regex::Regex;
use std::sync::OnceLock;

use super::NumericRange;
use crate::errors::{IngestError, Result};

/// Rupees in one Crore.
pub const CRORE: f64 = 10_000_000.0;
/// Rupees in one Lakh.
pub const LAKH: f64 = 100_000.0;

/// 2^63, the first value past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

static AMOUNT_RE: OnceLock<Regex> = OnceLock::new();

fn amount_re() -> &'static Regex {
    AMOUNT_RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+\.?[0-9]*)\s*(Cr|L)").expect("static regex is valid")
    })
}

/// Convert one `<number><unit>` amount to whole rupees, truncating fractions.
fn to_rupees(number: &str, unit: &str) -> Result<i64> {
    let value: f64 = number
        .parse()
        .map_err(|e| IngestError::Normalize(format!("bad amount {number:?}: {e}")))?;
    let multiplier = if unit.eq_ignore_ascii_case("cr") {
        CRORE
    } else {
        LAKH
    };
    let rupees = value * multiplier;
    if !rupees.is_finite() || rupees >= I64_LIMIT {
        return Err(IngestError::Normalize(format!(
            "amount {number}{unit} does not fit in rupees"
        )));
    }
    Ok(rupees as i64)
}

/// Parse every `<number> Cr` / `<number> L` amount in `text` into a rupee range.
///
/// Amounts are taken in order of appearance: none gives `{0, 0}`, one gives
/// `min == max`, two or more give `min = first`, `max = second`. Only ASCII
/// digits count as numbers.
///
/// # Errors
/// [`IngestError::Normalize`] when an amount is too large for an `i64`.
pub fn extract_currency(text: &str) -> Result<NumericRange> {
    let values = amount_re()
        .captures_iter(text)
        .map(|caps| to_rupees(&caps[1], &caps[2]))
        .collect::<Result<Vec<i64>>>()?;
    Ok(NumericRange::from_ordered(&values))
}
