use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::curated::curated_synonyms;
use super::lookup::{DatamuseClient, SynonymLookup};
use crate::core::config::ShopsenseConfig;
use crate::core::error::Result;


/// Best-effort synonym enrichment for new catalog terms.
///
/// The curated dictionary wins; otherwise the lookup service is asked once,
/// bounded by `timeout`. Every failure degrades to an empty list.
pub struct SynonymDiscovery {
    lookup: Option<Arc<dyn SynonymLookup>>,
    timeout: Duration,
    max_results: usize,
}

impl SynonymDiscovery {
    pub fn new(lookup: Option<Arc<dyn SynonymLookup>>, timeout: Duration, max_results: usize) -> Self {
        Self {
            lookup,
            timeout,
            max_results,
        }
    }

    /// Curated dictionary only, no network.
    pub fn offline() -> Self {
        Self::new(None, Duration::ZERO, crate::DEFAULT_DISCOVERY_MAX_RESULTS)
    }

    pub fn from_config(config: &ShopsenseConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.discovery_timeout_ms);
        let lookup: Option<Arc<dyn SynonymLookup>> = if config.discovery_enabled {
            Some(Arc::new(DatamuseClient::new(&config.discovery_url, timeout)?))
        } else {
            None
        };
        Ok(Self::new(lookup, timeout, config.discovery_max_results))
    }

    pub async fn discover(&self, term: &str) -> Vec<String> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        if let Some(synonyms) = curated_synonyms(&term) {
            debug!("Curated synonyms for '{}': {:?}", term, synonyms);
            return synonyms;
        }

        let Some(lookup) = &self.lookup else {
            return Vec::new();
        };

        match tokio::time::timeout(self.timeout, lookup.lookup(&term, self.max_results)).await {
            Ok(Ok(words)) => {
                let synonyms = filter_single_words(words, self.max_results);
                info!(
                    "Discovered {} synonyms for '{}' via {}",
                    synonyms.len(),
                    term,
                    lookup.provider_name()
                );
                synonyms
            }
            Ok(Err(e)) => {
                warn!("Failed to fetch auto-synonyms for '{}': {}", term, e);
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "Auto-synonym lookup for '{}' timed out after {:?}",
                    term, self.timeout
                );
                Vec::new()
            }
        }
    }
}

fn filter_single_words(words: Vec<String>, max_results: usize) -> Vec<String> {
    let mut synonyms: Vec<String> = Vec::new();
    for word in words {
        let word = word.trim().to_lowercase();
        if word.is_empty() || word.contains(char::is_whitespace) || synonyms.contains(&word) {
            continue;
        }
        synonyms.push(word);
        if synonyms.len() >= max_results {
            break;
        }
    }
    synonyms
}
