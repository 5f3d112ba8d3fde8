use serde::Serialize;
use tracing::{info, warn};

use super::domain::Domain;
use super::store::VocabularyStore;
use crate::catalog::CatalogSource;


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub synonyms_loaded: usize,
    pub brands_added: usize,
    pub categories_added: usize,
}


/// Seeds `store` from its synonym repository and from the distinct brand and
/// category values currently in the catalog. Both sources are queried
/// concurrently; a failing source is logged and skipped.
pub async fn bootstrap(store: &VocabularyStore, catalog: Option<&dyn CatalogSource>) -> BootstrapReport {
    info!("Startup: initializing vocabulary");

    let catalog_terms = async {
        match catalog {
            Some(source) => Some(source.distinct_terms().await),
            None => None,
        }
    };
    let (synonyms_loaded, catalog_terms) =
        futures::join!(store.load_from_repository(), catalog_terms);

    let mut report = BootstrapReport {
        synonyms_loaded,
        ..Default::default()
    };

    match catalog_terms {
        Some(Ok(terms)) => {
            info!(
                "Startup: loading {} brands and {} categories from catalog",
                terms.brands.len(),
                terms.categories.len()
            );
            report.brands_added = store.add_canonical(Domain::Brand, &terms.brands).len();
            report.categories_added = store.add_canonical(Domain::Category, &terms.categories).len();
        }
        Some(Err(e)) => warn!("Startup: catalog aggregation failed: {}", e),
        None => {}
    }

    info!("Startup: vocabulary ready (version {})", store.version());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogTerms, StaticCatalog};
    use crate::core::error::{Result, ShopsenseError};
    use crate::vocabulary::lexicon::SynonymMap;
    use crate::vocabulary::repository::InMemoryRepository;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct BrokenCatalog;

    #[async_trait]
    impl CatalogSource for BrokenCatalog {
        async fn distinct_terms(&self) -> Result<CatalogTerms> {
            Err(ShopsenseError::Catalog("index unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_bootstrap_merges_repository_and_catalog() {
        let data = SynonymMap::from([(
            Domain::Brand,
            BTreeMap::from([("gucci".to_string(), vec!["guci".to_string()])]),
        )]);
        let store = VocabularyStore::seeded()
            .with_repository(Arc::new(InMemoryRepository::with_data(data)));
        let catalog = StaticCatalog::new(
            vec!["Gucci".to_string(), "nike".to_string()],
            vec!["mugs".to_string()],
        );

        let report = bootstrap(&store, Some(&catalog)).await;

        assert_eq!(
            report,
            BootstrapReport {
                synonyms_loaded: 1,
                brands_added: 1,
                categories_added: 1,
            }
        );
        assert_eq!(store.resolve(Domain::Brand, "guci"), "gucci");
        assert!(store.snapshot().contains(Domain::Category, "mugs"));
    }

    #[tokio::test]
    async fn test_bootstrap_survives_catalog_failure() {
        let store = VocabularyStore::seeded();
        let report = bootstrap(&store, Some(&BrokenCatalog)).await;
        assert_eq!(report, BootstrapReport::default());
    }
}
