

pub mod bootstrap;
pub mod domain;
pub mod lexicon;
pub mod repository;
pub mod seed;
pub mod store;

pub use bootstrap::{bootstrap, BootstrapReport};
pub use domain::Domain;
pub use lexicon::{DomainStats, Lexicon, SynonymMap, TermSet};
pub use repository::{InMemoryRepository, JsonFileRepository, SynonymRepository};
pub use store::VocabularyStore;
