use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::models::PriceRange;

/// What a matched price phrase constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceOp {
    Between,
    Below,
    Above,
    UpTo,
}

const CURRENCY: &str = r"(?:\$|₹|rs\.?)?\s*";

lazy_static! {
    // Tried in order; the first pattern that matches anywhere wins.
    static ref PRICE_PATTERNS: Vec<(Regex, PriceOp)> = [
        (format!(r"\bbetween\s+{CURRENCY}(\d+)\s+and\s+{CURRENCY}(\d+)"), PriceOp::Between),
        (format!(r"\b(?:under|below|less\s+than)\s+{CURRENCY}(\d+)"), PriceOp::Below),
        (format!(r"\b(?:above|over|greater\s+than|more\s+than)\s+{CURRENCY}(\d+)"), PriceOp::Above),
        (format!(r"\b(?:upto|up\s+to|within)\s+{CURRENCY}(\d+)"), PriceOp::UpTo),
    ]
    .into_iter()
    .filter_map(|(pattern, op)| Regex::new(&format!("(?i){pattern}")).ok().map(|re| (re, op)))
    .collect();
}

fn amount(caps: &Captures<'_>, group: usize) -> Option<i64> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Pulls a price constraint out of free text.
///
/// Only whole numbers are recognised. An amount too large for `i64` is
/// dropped rather than clamped.
pub fn extract_price(text: &str) -> PriceRange {
    for (pattern, op) in PRICE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        return match op {
            PriceOp::Between => PriceRange {
                min: amount(&caps, 1),
                max: amount(&caps, 2),
            },
            PriceOp::Below | PriceOp::UpTo => PriceRange {
                min: None,
                max: amount(&caps, 1),
            },
            PriceOp::Above => PriceRange {
                min: amount(&caps, 1),
                max: None,
            },
        };
    }
    PriceRange::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: Option<i64>, max: Option<i64>) -> PriceRange {
        PriceRange { min, max }
    }

    #[test]
    fn test_patterns_compile() {
        assert_eq!(PRICE_PATTERNS.len(), 4);
    }

    #[test]
    fn test_between() {
        assert_eq!(
            extract_price("running shoes between 100 and 200"),
            range(Some(100), Some(200))
        );
        assert_eq!(extract_price("between $50 and $80"), range(Some(50), Some(80)));
    }

    #[test]
    fn test_upper_bounds() {
        assert_eq!(extract_price("red dress under 3000"), range(None, Some(3000)));
        assert_eq!(extract_price("below ₹999"), range(None, Some(999)));
        assert_eq!(extract_price("less than rs. 450"), range(None, Some(450)));
        assert_eq!(extract_price("phone upto 20000"), range(None, Some(20000)));
        assert_eq!(extract_price("phone up to 15000"), range(None, Some(15000)));
        assert_eq!(extract_price("within $70"), range(None, Some(70)));
    }

    #[test]
    fn test_lower_bounds() {
        assert_eq!(extract_price("watches above 500"), range(Some(500), None));
        assert_eq!(extract_price("over $20"), range(Some(20), None));
        assert_eq!(extract_price("more than 1000"), range(Some(1000), None));
        assert_eq!(extract_price("greater than 5"), range(Some(5), None));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_price("UNDER $40"), range(None, Some(40)));
    }

    #[test]
    fn test_first_pattern_wins() {
        // "between" is tried before "under" even though "under" comes first
        assert_eq!(
            extract_price("under 900 or between 100 and 200"),
            range(Some(100), Some(200))
        );
        assert_eq!(extract_price("above 100 under 300"), range(None, Some(300)));
    }

    #[test]
    fn test_no_price() {
        assert!(extract_price("black running shoes").is_empty());
        assert!(extract_price("").is_empty());
        assert!(extract_price("under the sea").is_empty());
        // word boundary: "thunder" is not "under"
        assert!(extract_price("thunder 300").is_empty());
    }

    #[test]
    fn test_overflow_is_absent() {
        assert_eq!(extract_price("under 99999999999999999999"), range(None, None));
        assert_eq!(
            extract_price("between 10 and 99999999999999999999"),
            range(Some(10), None)
        );
    }
}
