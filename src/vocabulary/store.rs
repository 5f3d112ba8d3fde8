use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::domain::Domain;
use super::lexicon::{DomainStats, Lexicon, SynonymMap};
use super::repository::SynonymRepository;
use crate::query::tokenizer::{Lemmatizer, PorterLemmatizer};
use crate::utils::normalize_terms;


/// Process-wide vocabulary shared by the parser and the ingest path.
///
/// Readers take an `Arc<Lexicon>` snapshot and never block. Writers are
/// serialized on `write_lock`, copy the current lexicon, mutate the copy and
/// swap it in, so a reader never observes a half-applied update.
pub struct VocabularyStore {
    current: ArcSwap<Lexicon>,
    write_lock: Mutex<()>,
    lemmatizer: Arc<dyn Lemmatizer>,
    repository: Option<Arc<dyn SynonymRepository>>,
}

impl VocabularyStore {
    pub fn new(mut lexicon: Lexicon, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        lexicon.rebuild_category_lemmas(lemmatizer.as_ref());
        Self {
            current: ArcSwap::from_pointee(lexicon),
            write_lock: Mutex::new(()),
            lemmatizer,
            repository: None,
        }
    }


    pub fn seeded() -> Self {
        Self::new(Lexicon::seeded(), Arc::new(PorterLemmatizer::new()))
    }

    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn SynonymRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.current.load_full()
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.current.load().version()
    }

    pub fn lemmatizer(&self) -> Arc<dyn Lemmatizer> {
        Arc::clone(&self.lemmatizer)
    }

    pub fn resolve(&self, domain: Domain, token: &str) -> String {
        self.current.load().resolve(domain, &token.to_lowercase())
    }

    pub fn stats(&self) -> BTreeMap<Domain, DomainStats> {
        self.current.load().stats()
    }

    /// Unions `terms` (lowercased) into the domain's canonical set and returns
    /// the ones that were new. Adding categories re-derives the lemma index.
    pub fn add_canonical<I, S>(&self, domain: Domain, terms: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = normalize_terms(terms);
        let added = self.write(|lexicon| {
            let added = lexicon.add_canonical(domain, terms);
            if domain == Domain::Category && !added.is_empty() {
                lexicon.rebuild_category_lemmas(self.lemmatizer.as_ref());
            }
            let changed = !added.is_empty();
            (added, changed)
        });

        if !added.is_empty() {
            info!("Vocabulary updated: {} new {} {:?}", added.len(), domain, added);
        }
        added
    }

    /// Merges `terms` (lowercased) into the synonyms of `canonical`. Returns
    /// whether anything was added; if so, persistence of the new synonyms is
    /// scheduled on the current tokio runtime.
    pub fn add_synonyms<I, S>(&self, domain: Domain, canonical: &str, terms: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = canonical.trim().to_lowercase();
        let terms = normalize_terms(terms);
        let added = self.write(|lexicon| {
            let added = lexicon.add_synonyms(domain, &canonical, terms);
            let changed = !added.is_empty();
            (added, changed)
        });

        if added.is_empty() {
            debug!("No new synonyms for {}/{}", domain, canonical);
            return false;
        }

        info!("In-memory synonyms updated for {}/{}: {:?}", domain, canonical, added);
        self.schedule_persist(domain, canonical, added);
        true
    }

    /// Bulk-merges a loaded synonym map without scheduling persistence.
    pub fn merge_synonym_map(&self, map: &SynonymMap) -> usize {
        self.write(|lexicon| {
            let mut added = 0;
            for (domain, entries) in map {
                for (canonical, synonyms) in entries {
                    let canonical = canonical.trim().to_lowercase();
                    added += lexicon
                        .add_synonyms(*domain, &canonical, normalize_terms(synonyms))
                        .len();
                }
            }
            (added, added > 0)
        })
    }

    /// Loads every persisted synonym into memory. Repository failures are
    /// logged and leave the in-memory state untouched.
    pub async fn load_from_repository(&self) -> usize {
        let Some(repository) = &self.repository else {
            debug!("No synonym repository configured, skipping load");
            return 0;
        };

        match repository.load_all().await {
            Ok(map) => {
                let added = self.merge_synonym_map(&map);
                info!("Loaded {} synonyms for {:?}", added, map.keys().collect::<Vec<_>>());
                added
            }
            Err(e) => {
                warn!("Error loading synonyms from repository: {}", e);
                0
            }
        }
    }

    /// Loads and merges one domain's persisted synonyms, returning that
    /// domain's synonym map as held in memory afterwards.
    pub async fn load(&self, domain: Domain) -> BTreeMap<String, Vec<String>> {
        if let Some(repository) = &self.repository {
            match repository.load_all().await {
                Ok(mut map) => {
                    if let Some(entries) = map.remove(&domain) {
                        let single = SynonymMap::from([(domain, entries)]);
                        self.merge_synonym_map(&single);
                    }
                }
                Err(e) => warn!("Error loading {} synonyms from repository: {}", domain, e),
            }
        }

        self.snapshot()
            .to_synonym_map()
            .remove(&domain)
            .unwrap_or_default()
    }

    /// Writes `synonyms` for `(domain, canonical)` to the repository.
    /// Returns whether the write succeeded; failures are only logged.
    pub async fn persist(&self, domain: Domain, canonical: &str, synonyms: &[String]) -> bool {
        match &self.repository {
            Some(repository) => {
                persist_with(repository.as_ref(), domain, canonical, synonyms).await
            }
            None => false,
        }
    }

    fn schedule_persist(&self, domain: Domain, canonical: String, synonyms: Vec<String>) {
        let Some(repository) = self.repository.clone() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    persist_with(repository.as_ref(), domain, &canonical, &synonyms).await;
                });
            }
            Err(_) => {
                warn!(
                    "No async runtime available; synonyms for {}/{} kept in memory only",
                    domain, canonical
                );
            }
        }
    }

    fn write<R>(&self, mutate: impl FnOnce(&mut Lexicon) -> (R, bool)) -> R {
        let _guard = self.write_lock.lock();
        let mut next = Lexicon::clone(&self.current.load());
        let (result, changed) = mutate(&mut next);
        if changed {
            next.bump_version();
            self.current.store(Arc::new(next));
        }
        result
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::seeded()
    }
}

async fn persist_with(
    repository: &dyn SynonymRepository,
    domain: Domain,
    canonical: &str,
    synonyms: &[String],
) -> bool {
    match repository.upsert(domain, canonical, synonyms).await {
        Ok(()) => {
            debug!("Persisted synonyms for {}/{}", domain, canonical);
            true
        }
        Err(e) => {
            warn!("Failed to save synonyms for {}/{}: {}", domain, canonical, e);
            false
        }
    }
}
