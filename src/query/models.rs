use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ShopsenseError};


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}


/// Structured form of a shopping query.
///
/// Entity slots always hold canonical vocabulary terms. `price_min <=
/// price_max` is not guaranteed; see [`ParsedQuery::validate_price_range`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub keywords: BTreeSet<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}

impl ParsedQuery {

    pub fn price_range(&self) -> PriceRange {
        PriceRange {
            min: self.price_min,
            max: self.price_max,
        }
    }

    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.brand.is_some()
            || self.color.is_some()
            || self.gender.is_some()
            || !self.price_range().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && !self.has_filters()
    }

    /// Keywords joined by single spaces, in sorted order.
    pub fn keyword_text(&self) -> String {
        self.keywords.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    /// Whether `value` is already held by one of the entity slots.
    pub fn holds_entity(&self, value: &str) -> bool {
        [&self.category, &self.brand, &self.color, &self.gender]
            .into_iter()
            .any(|slot| slot.as_deref() == Some(value))
    }

    pub fn validate_price_range(&self) -> Result<()> {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) if min > max => Err(ShopsenseError::Validation(format!(
                "price_min {min} is greater than price_max {max}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let parsed = ParsedQuery::default();
        assert!(parsed.is_empty());
        assert!(!parsed.has_filters());
        assert_eq!(parsed.keyword_text(), "");
    }

    #[test]
    fn test_price_only_counts_as_filter() {
        let parsed = ParsedQuery {
            price_max: Some(3000),
            ..Default::default()
        };
        assert!(parsed.has_filters());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_keyword_text_is_sorted() {
        let parsed = ParsedQuery {
            keywords: ["waterproof", "hiking"].into_iter().map(String::from).collect(),
            ..Default::default()
        };
        assert_eq!(parsed.keyword_text(), "hiking waterproof");
    }

    #[test]
    fn test_validate_price_range() {
        let inverted = ParsedQuery {
            price_min: Some(500),
            price_max: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate_price_range(),
            Err(ShopsenseError::Validation(_))
        ));

        let open = ParsedQuery {
            price_min: Some(500),
            ..Default::default()
        };
        assert!(open.validate_price_range().is_ok());
    }

    #[test]
    fn test_serializes_fixed_shape() {
        let parsed = ParsedQuery {
            brand: Some("puma".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["brand"], "puma");
        assert!(value["category"].is_null());
        assert!(value["keywords"].as_array().unwrap().is_empty());
    }
}
