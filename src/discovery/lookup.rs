use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::core::error::{Result, ShopsenseError};


/// External "means like" word service.
#[async_trait]
pub trait SynonymLookup: Send + Sync {
    /// Ranked related words for `word`, at most `max_results`.
    async fn lookup(&self, word: &str, max_results: usize) -> Result<Vec<String>>;

    fn provider_name(&self) -> &str;
}


#[derive(Deserialize)]
struct DatamuseWord {
    word: String,
}


pub struct DatamuseClient {
    client: Client,
    base_url: Url,
}

impl DatamuseClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    fn words_url(&self, word: &str, max_results: usize) -> Result<Url> {
        let mut url = self.base_url.join("words")?;
        url.query_pairs_mut()
            .append_pair("ml", word)
            .append_pair("max", &max_results.to_string());
        Ok(url)
    }
}

#[async_trait]
impl SynonymLookup for DatamuseClient {
    async fn lookup(&self, word: &str, max_results: usize) -> Result<Vec<String>> {
        let url = self.words_url(word, max_results)?;
        debug!("Datamuse lookup: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopsenseError::lookup(format!(
                "datamuse returned status {status}"
            )));
        }

        let words: Vec<DatamuseWord> = response.json().await?;
        Ok(words.into_iter().map(|w| w.word).collect())
    }

    fn provider_name(&self) -> &str {
        "datamuse"
    }
}
