use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::domain::Domain;
use super::seed::{seed_terms, SEED_SYNONYMS};
use crate::query::tokenizer::Lemmatizer;


/// domain -> canonical term -> synonyms, as exchanged with the repository.
pub type SynonymMap = BTreeMap<Domain, BTreeMap<String, Vec<String>>>;


/// Insertion-ordered set of terms. Iteration order is the order terms were
/// first added, which keeps fuzzy tie-breaks reproducible.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl TermSet {
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.index.contains(&term) {
            return false;
        }
        self.index.insert(term.clone());
        self.order.push(term);
        true
    }

    fn remove(&mut self, term: &str) -> bool {
        if !self.index.remove(term) {
            return false;
        }
        self.order.retain(|t| t != term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}


#[derive(Debug, Clone, Default)]
struct DomainSynonyms {
    by_canonical: HashMap<String, TermSet>,
    owner: HashMap<String, String>,
}

impl DomainSynonyms {
    // A synonym owned by another canonical term moves to `canonical`.
    fn insert(&mut self, canonical: &str, synonym: String) -> bool {
        match self.owner.get(&synonym) {
            Some(current) if current == canonical => return false,
            Some(previous) => {
                if let Some(set) = self.by_canonical.get_mut(previous) {
                    set.remove(&synonym);
                }
            }
            None => {}
        }
        self.owner.insert(synonym.clone(), canonical.to_string());
        self.by_canonical
            .entry(canonical.to_string())
            .or_default()
            .insert(synonym)
    }

    fn canonical_for(&self, synonym: &str) -> Option<&str> {
        self.owner.get(synonym).map(String::as_str)
    }
}


#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainStats {
    pub canonical_terms: usize,
    pub synonyms: usize,
}


/// Immutable vocabulary snapshot: canonical terms, synonyms and the category
/// lemma index for every domain.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    canonical: HashMap<Domain, TermSet>,
    synonyms: HashMap<Domain, DomainSynonyms>,
    category_lemmas: TermSet,
    lemma_to_category: HashMap<String, String>,
    version: u64,
}

impl Lexicon {

    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped starter vocabulary. The category lemma index is built by
    /// the store that owns the lexicon.
    pub fn seeded() -> Self {
        let mut lexicon = Self::default();
        for domain in Domain::all() {
            let set = lexicon.canonical.entry(domain).or_default();
            for term in seed_terms(domain) {
                set.insert(*term);
            }
        }
        for (domain, canonical, synonyms) in SEED_SYNONYMS.iter() {
            lexicon.add_synonyms(*domain, canonical, synonyms.iter().map(|s| s.to_string()));
        }
        lexicon
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    pub fn contains(&self, domain: Domain, term: &str) -> bool {
        self.canonical
            .get(&domain)
            .is_some_and(|set| set.contains(term))
    }

    pub fn terms(&self, domain: Domain) -> impl Iterator<Item = &str> + '_ {
        self.canonical
            .get(&domain)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    pub fn synonyms(&self, domain: Domain, canonical: &str) -> Vec<String> {
        self.synonyms
            .get(&domain)
            .and_then(|s| s.by_canonical.get(canonical))
            .map(TermSet::to_vec)
            .unwrap_or_default()
    }

    /// Canonical key for `token` in `domain`'s synonym map, if any.
    pub fn canonical_for(&self, domain: Domain, token: &str) -> Option<&str> {
        self.synonyms.get(&domain)?.canonical_for(token)
    }

    /// Looks `token` up in every domain's synonyms, `domain` first. Returns
    /// the canonical key on a hit and the token unchanged otherwise.
    pub fn resolve(&self, domain: Domain, token: &str) -> String {
        domain
            .lookup_order()
            .find_map(|d| self.canonical_for(d, token))
            .unwrap_or(token)
            .to_string()
    }

    pub fn category_lemmas(&self) -> impl Iterator<Item = &str> + '_ {
        self.category_lemmas.iter()
    }

    /// First canonical category (in insertion order) whose lemma is `lemma`.
    pub fn category_for_lemma(&self, lemma: &str) -> Option<&str> {
        self.lemma_to_category.get(lemma).map(String::as_str)
    }

    pub fn stats(&self) -> BTreeMap<Domain, DomainStats> {
        Domain::all()
            .map(|domain| {
                let stats = DomainStats {
                    canonical_terms: self.canonical.get(&domain).map_or(0, TermSet::len),
                    synonyms: self.synonyms.get(&domain).map_or(0, |s| s.owner.len()),
                };
                (domain, stats)
            })
            .collect()
    }

    pub fn to_synonym_map(&self) -> SynonymMap {
        let mut map = SynonymMap::new();
        for (domain, synonyms) in &self.synonyms {
            let entry = map.entry(*domain).or_default();
            for (canonical, set) in &synonyms.by_canonical {
                if !set.is_empty() {
                    entry.insert(canonical.clone(), set.to_vec());
                }
            }
        }
        map
    }

    pub(crate) fn add_canonical<I>(&mut self, domain: Domain, terms: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let set = self.canonical.entry(domain).or_default();
        terms
            .into_iter()
            .filter(|term| set.insert(term.clone()))
            .collect()
    }

    pub(crate) fn add_synonyms<I>(&mut self, domain: Domain, canonical: &str, terms: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let synonyms = self.synonyms.entry(domain).or_default();
        terms
            .into_iter()
            .filter(|term| synonyms.insert(canonical, term.clone()))
            .collect()
    }

    pub(crate) fn rebuild_category_lemmas(&mut self, lemmatizer: &dyn Lemmatizer) {
        let mut lemmas = TermSet::default();
        let mut lemma_to_category = HashMap::new();
        for category in self.terms(Domain::Category) {
            let lemma = lemmatizer.lemma(category);
            lemma_to_category
                .entry(lemma.clone())
                .or_insert_with(|| category.to_string());
            lemmas.insert(lemma);
        }
        self.category_lemmas = lemmas;
        self.lemma_to_category = lemma_to_category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tokenizer::PorterLemmatizer;

    fn owned(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_seeded_contains_core_vocabulary() {
        let lexicon = Lexicon::seeded();
        assert!(lexicon.contains(Domain::Category, "shoes"));
        assert!(lexicon.contains(Domain::Brand, "puma"));
        assert!(lexicon.contains(Domain::Color, "black"));
        assert!(lexicon.contains(Domain::Gender, "men"));
        assert_eq!(lexicon.canonical_for(Domain::Category, "sneakers"), Some("shoes"));
    }

    #[test]
    fn test_resolve_checks_every_domain() {
        let mut lexicon = Lexicon::empty();
        lexicon.add_synonyms(Domain::Brand, "nike", owned(&["nikes"]));

        assert_eq!(lexicon.resolve(Domain::Category, "nikes"), "nike");
        assert_eq!(lexicon.resolve(Domain::Color, "unknown"), "unknown");
    }

    #[test]
    fn test_resolve_prefers_requested_domain() {
        let lexicon = Lexicon::seeded();
        assert_eq!(lexicon.resolve(Domain::Category, "iphone"), "phone");
        assert_eq!(lexicon.resolve(Domain::Brand, "iphone"), "apple");
    }

    #[test]
    fn test_synonym_moves_to_latest_canonical() {
        let mut lexicon = Lexicon::empty();
        lexicon.add_synonyms(Domain::Category, "shoes", owned(&["kicks"]));
        let added = lexicon.add_synonyms(Domain::Category, "boots", owned(&["kicks"]));

        assert_eq!(added, owned(&["kicks"]));
        assert_eq!(lexicon.resolve(Domain::Category, "kicks"), "boots");
        assert!(lexicon.synonyms(Domain::Category, "shoes").is_empty());
        assert_eq!(lexicon.stats()[&Domain::Category].synonyms, 1);
    }

    #[test]
    fn test_add_canonical_reports_only_new_terms() {
        let mut lexicon = Lexicon::seeded();
        let added = lexicon.add_canonical(Domain::Brand, owned(&["nike", "gucci"]));
        assert_eq!(added, owned(&["gucci"]));
    }

    #[test]
    fn test_category_lemma_maps_to_first_category() {
        let mut lexicon = Lexicon::empty();
        lexicon.add_canonical(Domain::Category, owned(&["shoes", "shoe", "bags"]));
        lexicon.rebuild_category_lemmas(&PorterLemmatizer::new());

        assert_eq!(lexicon.category_for_lemma("shoe"), Some("shoes"));
        assert_eq!(lexicon.category_lemmas().collect::<Vec<_>>(), vec!["shoe", "bag"]);
    }

    #[test]
    fn test_to_synonym_map_skips_emptied_keys() {
        let mut lexicon = Lexicon::empty();
        lexicon.add_synonyms(Domain::Category, "shoes", owned(&["kicks"]));
        lexicon.add_synonyms(Domain::Category, "boots", owned(&["kicks"]));

        let map = lexicon.to_synonym_map();
        assert_eq!(map[&Domain::Category].len(), 1);
        assert_eq!(map[&Domain::Category]["boots"], owned(&["kicks"]));
    }
}
