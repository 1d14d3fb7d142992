//! Free-text normalization for scraped listing fields.
//!
//! Every function here is pure: one text field in, one structured value out.
//! Numbers are ASCII digits only. A number too large for an `i64` is a
//! [`Normalize`](crate::IngestError::Normalize) error rather than a clamped value.
//! - [`extract_builder_location`] — `By <builder> in <location>` phrases
//! - [`extract_currency`] — Crore / Lakh price text to rupees
//! - [`extract_area`] — `sq ft` area text to an integer range
//! - [`extract_bhk`] — leading numeric token of a unit-configuration label
//! - [`strip_prefix_label`] — drops fixed labels such as `Launched:`

pub mod area;
pub mod builder;
pub mod currency;
pub mod label;

pub use area::extract_area;
pub use builder::{extract_builder_location, BuilderLocation, UNKNOWN};
pub use currency::extract_currency;
pub use label::{extract_bhk, strip_prefix_label};

use serde::{Deserialize, Serialize};

/// An inclusive integer range parsed from free text.
///
/// `{0, 0}` means nothing could be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Range where both ends are the same value.
    pub fn single(value: i64) -> Self {
        Self::new(value, value)
    }

    /// Build a range from values in order of appearance.
    ///
    /// Only the first two slots are used: the first value is `min`, the second
    /// is `max`, anything after that is ignored. No sorting takes place.
    pub fn from_ordered(values: &[i64]) -> Self {
        match values {
            [] => Self::default(),
            [only] => Self::single(*only),
            [first, second, ..] => Self::new(*first, *second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ordered_empty_is_zero() {
        assert_eq!(NumericRange::from_ordered(&[]), NumericRange::new(0, 0));
    }

    #[test]
    fn test_from_ordered_single() {
        assert_eq!(NumericRange::from_ordered(&[42]), NumericRange::new(42, 42));
    }

    #[test]
    fn test_from_ordered_keeps_appearance_order() {
        // Not sorted: a descending pair stays descending.
        assert_eq!(NumericRange::from_ordered(&[9, 3]), NumericRange::new(9, 3));
    }

    #[test]
    fn test_from_ordered_ignores_extra_values() {
        assert_eq!(
            NumericRange::from_ordered(&[1, 2, 3, 4]),
            NumericRange::new(1, 2)
        );
    }
}
