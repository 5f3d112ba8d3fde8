use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use shopsense::vocabulary::{bootstrap, JsonFileRepository};
use shopsense::{QueryParser, ShopsenseConfig, VocabularyStore};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("shopsense=warn".parse()?))
        .init();

    let config_path = std::env::var_os("SHOPSENSE_CONFIG").map(PathBuf::from);
    let config = ShopsenseConfig::load(config_path.as_deref())?;

    let mut store = VocabularyStore::seeded();
    if let Some(path) = &config.synonym_path {
        store = store.with_repository(Arc::new(JsonFileRepository::new(path)));
    }
    let store = Arc::new(store);
    let report = bootstrap(&store, None).await;
    info!("Vocabulary ready: {:?}", report);

    let parser = QueryParser::from_config(Arc::clone(&store), &config);

    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            println!("{}", serde_json::to_string(&parser.parse_cached(&line))?);
        }
    } else {
        for query in &queries {
            println!("{}", serde_json::to_string(&parser.parse_cached(query))?);
        }
    }

    Ok(())
}
