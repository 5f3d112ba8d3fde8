pub mod cache;
pub mod fuzzy;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod price;
pub mod stopwords;
pub mod tokenizer;

pub use cache::{CacheStats, ParseCache};
pub use fuzzy::{fuzzy_match, ratio};
pub use models::{ParsedQuery, PriceRange};
pub use normalizer::{normalize, MultiwordNormalizer, MultiwordRule};
pub use parser::QueryParser;
pub use price::extract_price;
pub use tokenizer::{Lemmatizer, PorterLemmatizer, RegexTokenizer, Token, Tokenizer};
