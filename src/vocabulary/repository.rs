use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::domain::Domain;
use super::lexicon::SynonymMap;
use crate::core::error::{Result, ShopsenseError};


/// Persistent synonym storage, keyed by domain identifier then canonical term.
#[async_trait]
pub trait SynonymRepository: Send + Sync {
    async fn load_all(&self) -> Result<SynonymMap>;

    /// Adds `synonyms` to the stored set for `(domain, canonical)`, creating
    /// the entry when missing. Existing synonyms are kept. A synonym stored
    /// under another canonical term of the same domain moves to `canonical`.
    async fn upsert(&self, domain: Domain, canonical: &str, synonyms: &[String]) -> Result<()>;
}

// Keeps one owner per synonym within a domain's entries.
fn claim_synonyms(entries: &mut BTreeMap<String, Vec<String>>, canonical: &str, synonyms: &[String]) {
    for (key, stored) in entries.iter_mut() {
        if key != canonical {
            stored.retain(|s| !synonyms.contains(s));
        }
    }
    entries.retain(|key, stored| key == canonical || !stored.is_empty());

    let entry = entries.entry(canonical.to_string()).or_default();
    for synonym in synonyms {
        if !entry.contains(synonym) {
            entry.push(synonym.clone());
        }
    }
}


#[derive(Default)]
pub struct InMemoryRepository {
    data: RwLock<SynonymMap>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: SynonymMap) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl SynonymRepository for InMemoryRepository {
    async fn load_all(&self) -> Result<SynonymMap> {
        Ok(self.data.read().clone())
    }

    async fn upsert(&self, domain: Domain, canonical: &str, synonyms: &[String]) -> Result<()> {
        claim_synonyms(self.data.write().entry(domain).or_default(), canonical, synonyms);
        Ok(())
    }
}


/// Synonyms stored as one JSON document:
/// `{"categories": {"shoes": ["kicks", ...]}, "brands": {...}}`.
///
/// Writes go to a sibling temp file that is renamed over the document.
pub struct JsonFileRepository {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

type Document = BTreeMap<String, BTreeMap<String, Vec<String>>>;

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Document::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Synonym file {} not found, starting empty", self.path.display());
                Ok(Document::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &Document) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn document_to_map(document: Document) -> SynonymMap {
    let mut map = SynonymMap::new();
    for (key, entries) in document {
        match Domain::from_str(&key) {
            Ok(domain) => {
                map.entry(domain).or_default().extend(entries);
            }
            Err(_) => warn!("Ignoring unknown synonym domain '{}'", key),
        }
    }
    map
}

#[async_trait]
impl SynonymRepository for JsonFileRepository {
    async fn load_all(&self) -> Result<SynonymMap> {
        Ok(document_to_map(self.read_document().await?))
    }

    async fn upsert(&self, domain: Domain, canonical: &str, synonyms: &[String]) -> Result<()> {
        if canonical.is_empty() {
            return Err(ShopsenseError::repository("canonical term must not be empty"));
        }

        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        claim_synonyms(document.entry(domain.to_string()).or_default(), canonical, synonyms);
        self.write_document(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_in_memory_upsert_is_add_to_set() {
        let repo = InMemoryRepository::new();
        repo.upsert(Domain::Category, "shoes", &owned(&["kicks", "trainers"])).await.unwrap();
        repo.upsert(Domain::Category, "shoes", &owned(&["kicks", "runners"])).await.unwrap();

        let map = repo.load_all().await.unwrap();
        assert_eq!(
            map[&Domain::Category]["shoes"],
            owned(&["kicks", "trainers", "runners"])
        );
    }

    #[tokio::test]
    async fn test_in_memory_upsert_moves_synonym() {
        let repo = InMemoryRepository::new();
        repo.upsert(Domain::Category, "shoes", &owned(&["clogs", "kicks"])).await.unwrap();
        repo.upsert(Domain::Category, "boots", &owned(&["clogs"])).await.unwrap();
        repo.upsert(Domain::Brand, "crocs", &owned(&["clogs"])).await.unwrap();

        let map = repo.load_all().await.unwrap();
        assert_eq!(map[&Domain::Category]["shoes"], owned(&["kicks"]));
        assert_eq!(map[&Domain::Category]["boots"], owned(&["clogs"]));
        // other domains keep their own owner
        assert_eq!(map[&Domain::Brand]["crocs"], owned(&["clogs"]));
    }

    #[tokio::test]
    async fn test_json_file_moved_synonym_keeps_latest_owner_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        let repo = JsonFileRepository::new(&path);

        repo.upsert(Domain::Category, "shoes", &owned(&["clogs"])).await.unwrap();
        repo.upsert(Domain::Category, "boots", &owned(&["clogs"])).await.unwrap();

        let map = JsonFileRepository::new(&path).load_all().await.unwrap();
        assert_eq!(map[&Domain::Category].len(), 1);
        assert_eq!(map[&Domain::Category]["boots"], owned(&["clogs"]));

        let mut lexicon = crate::vocabulary::Lexicon::empty();
        for (domain, entries) in &map {
            for (canonical, synonyms) in entries {
                lexicon.add_synonyms(*domain, canonical, synonyms.iter().cloned());
            }
        }
        assert_eq!(lexicon.resolve(Domain::Category, "clogs"), "boots");
    }

    #[tokio::test]
    async fn test_json_file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("synonyms.json"));
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        let repo = JsonFileRepository::new(&path);

        repo.upsert(Domain::Brand, "nike", &owned(&["nk"])).await.unwrap();
        repo.upsert(Domain::Brand, "nike", &owned(&["nk", "nikes"])).await.unwrap();
        repo.upsert(Domain::Category, "shoes", &owned(&["kicks"])).await.unwrap();

        let reopened = JsonFileRepository::new(&path);
        let map = reopened.load_all().await.unwrap();
        assert_eq!(map[&Domain::Brand]["nike"], owned(&["nk", "nikes"]));
        assert_eq!(map[&Domain::Category]["shoes"], owned(&["kicks"]));

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert!(raw.get("brands").is_some());
        assert!(raw.get("categories").is_some());
    }

    #[tokio::test]
    async fn test_json_file_ignores_unknown_domains() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        std::fs::write(
            &path,
            r#"{"sizes": {"xl": ["extra large"]}, "colors": {"red": ["crimson"]}}"#,
        )
        .unwrap();

        let map = JsonFileRepository::new(&path).load_all().await.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Domain::Color]["red"], owned(&["crimson"]));
    }

    #[tokio::test]
    async fn test_json_file_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileRepository::new(&path).load_all().await;
        assert!(matches!(result, Err(ShopsenseError::Serialization(_))));
    }
}
