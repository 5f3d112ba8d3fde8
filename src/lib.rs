pub mod catalog;
pub mod core;
pub mod discovery;
pub mod query;
pub mod utils;
pub mod vocabulary;

pub use utils::normalize_terms;


pub use catalog::{CatalogSource, CatalogTerms, IngestReport, NewProduct, ProductIngest, StaticCatalog};
pub use crate::core::config::ShopsenseConfig;
pub use crate::core::error::{Result, ShopsenseError};
pub use discovery::{DatamuseClient, SynonymDiscovery, SynonymLookup};
pub use query::{ParsedQuery, PriceRange, QueryParser};
pub use vocabulary::{Domain, Lexicon, SynonymRepository, VocabularyStore};


pub const DEFAULT_FUZZY_THRESHOLD: f64 = 75.0;


pub const DEFAULT_DISCOVERY_URL: &str = "https://api.datamuse.com";


pub const DEFAULT_DISCOVERY_TIMEOUT_MS: u64 = 2000;


pub const DEFAULT_DISCOVERY_MAX_RESULTS: usize = 10;


pub const DEFAULT_CACHE_SIZE: usize = 1000;


pub const DEFAULT_CACHE_TTL: u64 = 300;
