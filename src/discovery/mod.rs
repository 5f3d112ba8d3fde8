

pub mod curated;
pub mod lookup;
pub mod service;

pub use curated::{curated_synonyms, PRODUCT_SYNONYMS};
pub use lookup::{DatamuseClient, SynonymLookup};
pub use service::SynonymDiscovery;
