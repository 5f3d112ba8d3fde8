use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::discovery::SynonymDiscovery;
use crate::vocabulary::{Domain, VocabularyStore};


/// The vocabulary-relevant fields of a product being created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl NewProduct {
    /// Lowercases category, brand, color and gender for consistent search.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            category: self.category.trim().to_lowercase(),
            brand: self.brand.trim().to_lowercase(),
            color: self.color.as_ref().map(|c| c.trim().to_lowercase()),
            gender: self.gender.as_ref().map(|g| g.trim().to_lowercase()),
            synonyms: self.synonyms.clone(),
        }
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub new_brand: bool,
    pub new_category: bool,
    pub brand_synonyms_added: bool,
    pub category_synonyms_added: bool,
    /// Auto-discovered synonyms, for storing on the product record.
    pub discovered: Vec<String>,
}


/// Grows the vocabulary as products are created.
pub struct ProductIngest {
    store: Arc<VocabularyStore>,
    discovery: Arc<SynonymDiscovery>,
}

impl ProductIngest {
    pub fn new(store: Arc<VocabularyStore>, discovery: Arc<SynonymDiscovery>) -> Self {
        Self { store, discovery }
    }

    /// Registers the product's brand and category. Explicit synonyms go to
    /// both the brand and the category; without them, synonyms for the
    /// category are auto-discovered. Never fails: discovery and persistence
    /// problems only reduce what gets added.
    pub async fn register(&self, product: &NewProduct) -> IngestReport {
        let product = product.normalized();
        let mut report = IngestReport::default();

        if !product.brand.is_empty() {
            report.new_brand = !self.store.add_canonical(Domain::Brand, [&product.brand]).is_empty();
        }
        if !product.category.is_empty() {
            report.new_category = !self
                .store
                .add_canonical(Domain::Category, [&product.category])
                .is_empty();
        }

        if !product.synonyms.is_empty() {
            if !product.brand.is_empty() {
                report.brand_synonyms_added =
                    self.store
                        .add_synonyms(Domain::Brand, &product.brand, &product.synonyms);
            }
            if !product.category.is_empty() {
                report.category_synonyms_added =
                    self.store
                        .add_synonyms(Domain::Category, &product.category, &product.synonyms);
            }
        } else if !product.category.is_empty() {
            debug!("Auto-discovering synonyms for category: {}", product.category);
            let discovered = self.discovery.discover(&product.category).await;
            if !discovered.is_empty() {
                info!("Found auto-synonyms for {}: {:?}", product.category, discovered);
                report.category_synonyms_added =
                    self.store
                        .add_synonyms(Domain::Category, &product.category, &discovered);
                report.discovered = discovered;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingest() -> (Arc<VocabularyStore>, ProductIngest) {
        let store = Arc::new(VocabularyStore::seeded());
        let ingest = ProductIngest::new(Arc::clone(&store), Arc::new(SynonymDiscovery::offline()));
        (store, ingest)
    }

    #[tokio::test]
    async fn test_register_adds_brand_and_category() {
        let (store, ingest) = ingest();
        let product = NewProduct {
            name: "Ceramic mug".to_string(),
            category: "Mugs".to_string(),
            brand: "Borosil".to_string(),
            ..Default::default()
        };

        let report = ingest.register(&product).await;

        assert!(report.new_brand);
        assert!(report.new_category);
        let snapshot = store.snapshot();
        assert!(snapshot.contains(Domain::Brand, "borosil"));
        assert!(snapshot.contains(Domain::Category, "mugs"));
    }

    #[tokio::test]
    async fn test_explicit_synonyms_go_to_brand_and_category() {
        let (store, ingest) = ingest();
        let product = NewProduct {
            name: "Air Max".to_string(),
            category: "shoes".to_string(),
            brand: "nike".to_string(),
            synonyms: vec!["Swooshies".to_string()],
            ..Default::default()
        };

        let report = ingest.register(&product).await;

        assert!(!report.new_brand);
        assert!(report.brand_synonyms_added);
        assert!(report.category_synonyms_added);
        assert!(report.discovered.is_empty());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.canonical_for(Domain::Brand, "swooshies"), Some("nike"));
        assert_eq!(snapshot.canonical_for(Domain::Category, "swooshies"), Some("shoes"));
    }

    #[tokio::test]
    async fn test_missing_synonyms_triggers_discovery() {
        let (store, ingest) = ingest();
        let product = NewProduct {
            name: "Travel mug".to_string(),
            category: "mug".to_string(),
            brand: "milton".to_string(),
            ..Default::default()
        };

        let report = ingest.register(&product).await;

        assert_eq!(report.discovered, vec!["cup", "coffee cup", "tumbler"]);
        assert!(report.category_synonyms_added);
        assert_eq!(store.resolve(Domain::Category, "tumbler"), "mug");
    }

    #[tokio::test]
    async fn test_discovery_miss_leaves_synonyms_untouched() {
        let (store, ingest) = ingest();
        let before = store.stats()[&Domain::Category].synonyms;
        let product = NewProduct {
            name: "Kettle".to_string(),
            category: "kettles".to_string(),
            brand: "prestige".to_string(),
            ..Default::default()
        };

        let report = ingest.register(&product).await;

        assert!(!report.category_synonyms_added);
        assert_eq!(store.stats()[&Domain::Category].synonyms, before);
    }
}
