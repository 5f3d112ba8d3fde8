use std::sync::Arc;

use tracing::debug;

use super::cache::{CacheStats, ParseCache};
use super::fuzzy::fuzzy_match;
use super::models::ParsedQuery;
use super::normalizer::MultiwordNormalizer;
use super::price::extract_price;
use super::stopwords::is_query_stop_word;
use super::tokenizer::{Lemmatizer, RegexTokenizer, Token, Tokenizer};
use crate::core::config::ShopsenseConfig;
use crate::vocabulary::{Domain, Lexicon, VocabularyStore};
use crate::DEFAULT_FUZZY_THRESHOLD;


/// Turns free-text shopping queries into [`ParsedQuery`] records.
///
/// Each parse works on one vocabulary snapshot, so concurrent vocabulary
/// writes never produce a half-updated result.
pub struct QueryParser {
    store: Arc<VocabularyStore>,
    normalizer: MultiwordNormalizer,
    tokenizer: Arc<dyn Tokenizer>,
    lemmatizer: Arc<dyn Lemmatizer>,
    fuzzy_threshold: f64,
    cache: Option<ParseCache<ParsedQuery>>,
}

impl QueryParser {
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        let lemmatizer = store.lemmatizer();
        Self {
            normalizer: MultiwordNormalizer::default(),
            tokenizer: Arc::new(RegexTokenizer::new(Arc::clone(&lemmatizer))),
            lemmatizer,
            store,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            cache: None,
        }
    }

    /// Threshold and cache sizing come from `config`; a zero cache capacity
    /// disables caching.
    pub fn from_config(store: Arc<VocabularyStore>, config: &ShopsenseConfig) -> Self {
        let parser = Self::new(store).with_threshold(config.fuzzy_threshold);
        if config.cache_capacity == 0 {
            parser
        } else {
            parser.with_cache(config.cache_capacity, config.cache_ttl_secs)
        }
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: MultiwordNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, capacity: usize, ttl_secs: u64) -> Self {
        self.cache = Some(ParseCache::new(capacity, ttl_secs));
        self
    }

    pub fn store(&self) -> &Arc<VocabularyStore> {
        &self.store
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ParseCache::stats)
    }

    pub fn parse(&self, raw: &str) -> ParsedQuery {
        let normalized = self.normalizer.normalize(raw);
        self.parse_normalized(&self.store.snapshot(), &normalized)
    }

    /// Like [`parse`](Self::parse), but served from the parse cache when one
    /// is configured. Entries are keyed by vocabulary version, so any
    /// vocabulary write makes older entries unreachable.
    pub fn parse_cached(&self, raw: &str) -> ParsedQuery {
        let Some(cache) = &self.cache else {
            return self.parse(raw);
        };

        let normalized = self.normalizer.normalize(raw);
        let lexicon = self.store.snapshot();
        let key = ParseCache::<ParsedQuery>::make_key(&normalized, lexicon.version());

        if let Some(hit) = cache.get(&key) {
            debug!("Parse cache hit for '{}'", normalized);
            return hit;
        }

        let parsed = self.parse_normalized(&lexicon, &normalized);
        cache.set(&key, parsed.clone());
        parsed
    }

    fn parse_normalized(&self, lexicon: &Lexicon, normalized: &str) -> ParsedQuery {
        let mut parsed = ParsedQuery::default();
        if normalized.trim().is_empty() {
            return parsed;
        }

        let price = extract_price(normalized);
        parsed.price_min = price.min;
        parsed.price_max = price.max;

        for token in self.tokenizer.tokenize(normalized) {
            if token.is_skippable() || is_query_stop_word(&token.text) {
                continue;
            }

            let resolved = lexicon.resolve(Domain::Category, &token.text);
            if self.classify(lexicon, &resolved, &mut parsed) {
                continue;
            }

            // repeated mentions of a filled slot are not keywords
            let resolved_lemma = lexicon.resolve(Domain::Category, &token.lemma);
            if !parsed.holds_entity(&resolved) && !parsed.holds_entity(&resolved_lemma) {
                parsed.keywords.insert(token.text);
            }
        }

        debug!("Parsed '{}' -> {:?}", normalized, parsed);
        parsed
    }

    /// Fills the first open slot `token` matches, in priority order
    /// category, color, gender, brand. Returns whether the token was consumed.
    fn classify(&self, lexicon: &Lexicon, token: &str, parsed: &mut ParsedQuery) -> bool {
        if parsed.category.is_none() {
            if let Some(category) = self.match_category(lexicon, token) {
                parsed.category = Some(category);
                return true;
            }
        }

        let slots = [
            (Domain::Color, &mut parsed.color),
            (Domain::Gender, &mut parsed.gender),
            (Domain::Brand, &mut parsed.brand),
        ];
        for (domain, slot) in slots {
            if slot.is_some() {
                continue;
            }
            if let Some(term) = self.match_term(lexicon, domain, token) {
                *slot = Some(term);
                return true;
            }
        }
        false
    }

    // Categories also match on base form, so "shoe" finds "shoes".
    fn match_category(&self, lexicon: &Lexicon, token: &str) -> Option<String> {
        if lexicon.contains(Domain::Category, token) {
            return Some(token.to_string());
        }

        let lemma = self.lemmatizer.lemma(token);
        if let Some(category) = lexicon.category_for_lemma(&lemma) {
            return Some(category.to_string());
        }

        fuzzy_match(&lemma, lexicon.category_lemmas(), self.fuzzy_threshold).map(|matched| {
            lexicon
                .category_for_lemma(matched)
                .unwrap_or(matched)
                .to_string()
        })
    }

    fn match_term(&self, lexicon: &Lexicon, domain: Domain, token: &str) -> Option<String> {
        if lexicon.contains(domain, token) {
            return Some(token.to_string());
        }
        fuzzy_match(token, lexicon.terms(domain), self.fuzzy_threshold).map(str::to_string)
    }

    /// Tokens the parser would classify, after stop-word filtering. Useful
    /// when debugging why a word did or did not match.
    pub fn content_tokens(&self, raw: &str) -> Vec<Token> {
        let normalized = self.normalizer.normalize(raw);
        self.tokenizer
            .tokenize(&normalized)
            .into_iter()
            .filter(|token| !token.is_skippable() && !is_query_stop_word(&token.text))
            .collect()
    }
}
