//! Builder / location extraction from `By <builder> in <location>` text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Placeholder name used when a builder or location cannot be parsed.
pub const UNKNOWN: &str = "Unknown";

static BY_IN_RE: OnceLock<Regex> = OnceLock::new();

fn by_in_re() -> &'static Regex {
    BY_IN_RE.get_or_init(|| Regex::new(r"(?i)By\s+(.*?)\s+in\s+(.*)").expect("static regex is valid"))
}

/// Developer and location names extracted from a listing's builder line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderLocation {
    pub builder: String,
    pub location: String,
}

/// Extract `{builder, location}` from text shaped like `By ABC Builders in Pune`.
///
/// Matching is case-insensitive and the location runs to the end of the line.
/// Without a match both names are [`UNKNOWN`]. With a match but an empty
/// builder capture only the builder becomes [`UNKNOWN`]; the location is
/// always taken from the match.
pub fn extract_builder_location(text: &str) -> BuilderLocation {
    match by_in_re().captures(text) {
        Some(caps) => {
            let builder = caps.get(1).map_or("", |m| m.as_str()).trim();
            let location = caps.get(2).map_or("", |m| m.as_str()).trim();
            BuilderLocation {
                builder: if builder.is_empty() {
                    UNKNOWN.to_string()
                } else {
                    builder.to_string()
                },
                location: location.to_string(),
            }
        }
        None => BuilderLocation {
            builder: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_location() {
        let got = extract_builder_location("By ABC Builders in Pune");
        assert_eq!(got.builder, "ABC Builders");
        assert_eq!(got.location, "Pune");
    }

    #[test]
    fn test_no_pattern_is_unknown() {
        let got = extract_builder_location("Developed independently");
        assert_eq!(got.builder, UNKNOWN);
        assert_eq!(got.location, UNKNOWN);
    }

    #[test]
    fn test_case_insensitive() {
        let got = extract_builder_location("by Lodha Group IN Thane West");
        assert_eq!(got.builder, "Lodha Group");
        assert_eq!(got.location, "Thane West");
    }

    #[test]
    fn test_location_is_rest_of_line() {
        let got = extract_builder_location("By Godrej Properties in Hinjewadi Phase 1, Pune\nRERA registered");
        assert_eq!(got.builder, "Godrej Properties");
        assert_eq!(got.location, "Hinjewadi Phase 1, Pune");
    }

    #[test]
    fn test_first_in_splits_builder() {
        // Lazy builder capture: the first " in " ends the builder name.
        let got = extract_builder_location("By Sobha in Whitefield in Bangalore");
        assert_eq!(got.builder, "Sobha");
        assert_eq!(got.location, "Whitefield in Bangalore");
    }

    #[test]
    fn test_empty_builder_is_unknown_but_location_kept() {
        let got = extract_builder_location("By  in Pune");
        assert_eq!(got.builder, UNKNOWN);
        assert_eq!(got.location, "Pune");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let got = extract_builder_location("  By   Kolte Patil   in   Kharadi   ");
        assert_eq!(got.builder, "Kolte Patil");
        assert_eq!(got.location, "Kharadi");
    }

    #[test]
    fn test_empty_text() {
        let got = extract_builder_location("");
        assert_eq!(got.builder, UNKNOWN);
        assert_eq!(got.location, UNKNOWN);
    }
}
