use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    // Product-oriented synonyms; the generic lookup service tends to return
    // slang for these.
    pub static ref PRODUCT_SYNONYMS: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("shoes", vec!["footwear", "sneakers", "trainers", "kicks", "boots"]);
        m.insert("phone", vec!["mobile", "smartphone", "cellphone", "handset"]);
        m.insert("shirt", vec!["top", "tee", "blouse", "jersey"]);
        m.insert("pants", vec!["trousers", "jeans", "slacks"]);
        m.insert("watch", vec!["timepiece", "wristwatch", "smartwatch"]);
        m.insert("bag", vec!["backpack", "purse", "handbag", "tote"]);
        m.insert("mug", vec!["cup", "coffee cup", "tumbler"]);
        m.insert("laptop", vec!["notebook", "computer", "pc"]);
        m.insert("headphones", vec!["earphones", "earbuds", "headset"]);
        m.insert("camera", vec!["dslr", "mirrorless", "camcorder"]);
        m
    };
}


pub fn curated_synonyms(term: &str) -> Option<Vec<String>> {
    PRODUCT_SYNONYMS
        .get(term.trim().to_lowercase().as_str())
        .map(|synonyms| synonyms.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_lookup_is_case_insensitive() {
        let synonyms = curated_synonyms("  Phone ").unwrap();
        assert_eq!(synonyms, vec!["mobile", "smartphone", "cellphone", "handset"]);
    }

    #[test]
    fn test_curated_miss() {
        assert!(curated_synonyms("kettle").is_none());
    }
}
