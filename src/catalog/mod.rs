

pub mod ingest;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;

pub use ingest::{IngestReport, NewProduct, ProductIngest};


/// Distinct canonical values currently present in the product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTerms {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
}


/// Aggregation query over the product catalog (e.g. a terms aggregation on
/// the search index).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn distinct_terms(&self) -> Result<CatalogTerms>;
}


pub struct StaticCatalog {
    terms: CatalogTerms,
}

impl StaticCatalog {
    pub fn new(brands: Vec<String>, categories: Vec<String>) -> Self {
        Self {
            terms: CatalogTerms { brands, categories },
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn distinct_terms(&self) -> Result<CatalogTerms> {
        Ok(self.terms.clone())
    }
}
