use super::{CatalogClient, CatalogDocument, CatalogSource, StrategyChain};
use crate::harvest::cache_doc;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};

const LOG_TARGET: &str = "    loader";

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

/// Candidate catalog file names, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPaths {
    /// Relative to the loader's base directory.
    pub local_files: Vec<String>,

    /// Relative to the raw-file base URL.
    pub remote_files: Vec<String>,
}

impl Default for LoaderPaths {
    fn default() -> Self {
        Self {
            local_files: strings(&["data/games.json", "games.json", "steam_games.json", "dataset.json"]),
            remote_files: strings(&[
                "data/games.json",
                "data/steam_games.json",
                "games.json",
                "steam_games.json",
                "dataset.json",
                "steam_dataset.json",
            ]),
        }
    }
}

/// Loads the game catalog from the first source that can provide it.
#[derive(Debug)]
pub struct Loader {
    base_dir: Utf8PathBuf,
    client: CatalogClient,
    paths: LoaderPaths,
    top_games: usize,
}

impl Loader {
    #[must_use]
    pub fn new(base_dir: impl Into<Utf8PathBuf>, client: CatalogClient) -> Self {
        Self {
            base_dir: base_dir.into(),
            client,
            paths: LoaderPaths::default(),
            top_games: 100,
        }
    }

    #[must_use]
    pub fn with_paths(mut self, paths: LoaderPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Number of apps promoted to top games in a degraded document.
    #[must_use]
    pub const fn with_top_games(mut self, top_games: usize) -> Self {
        self.top_games = top_games;
        self
    }

    /// Load the catalog: local cache, then remote files, then the public app list.
    ///
    /// The returned document's `metadata.source` names the strategy that produced it.
    /// Returns `None` when every strategy failed.
    pub async fn load(&self, now: DateTime<Utc>) -> Option<CatalogDocument> {
        let chain = StrategyChain::new()
            .then(CatalogSource::LocalCache, move || async move { self.load_local() })
            .then(CatalogSource::RemoteCatalog, move || self.load_remote())
            .then(CatalogSource::Degraded, move || self.load_degraded(now));

        let Some((source, mut doc)) = chain.run().await else {
            log::error!(target: LOG_TARGET, "No catalog source could be loaded");
            return None;
        };

        log::info!(target: LOG_TARGET, "Loaded {} games via {source}", doc.metadata.total_applications);
        doc.metadata.source = source;
        Some(doc)
    }

    fn load_local(&self) -> Option<CatalogDocument> {
        for file in &self.paths.local_files {
            let path = self.base_dir.join(file);
            if !path.exists() {
                continue;
            }

            let doc = cache_doc::load(&path, "cached catalog").and_then(CatalogDocument::from_json);
            match doc {
                Ok(doc) => {
                    log::info!(target: LOG_TARGET, "Using cached catalog '{path}'");
                    return Some(doc);
                }
                Err(e) => log::warn!(target: LOG_TARGET, "Ignoring cached catalog '{path}': {e:#}"),
            }
        }

        None
    }

    async fn load_remote(&self) -> Option<CatalogDocument> {
        for file in &self.paths.remote_files {
            if !self.client.exists(file).await {
                log::debug!(target: LOG_TARGET, "Remote catalog '{file}' not present");
                continue;
            }

            match self.client.download(file).await {
                Ok(doc) => {
                    log::info!(target: LOG_TARGET, "Downloaded remote catalog '{file}'");
                    return Some(doc);
                }
                Err(e) => log::warn!(target: LOG_TARGET, "Could not download remote catalog '{file}': {e:#}"),
            }
        }

        None
    }

    async fn load_degraded(&self, now: DateTime<Utc>) -> Option<CatalogDocument> {
        match self.client.app_list().await {
            Ok(apps) => {
                log::warn!(target: LOG_TARGET, "Falling back to the bare app list ({} apps)", apps.len());
                Some(CatalogDocument::degraded(apps, now, self.top_games))
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not fetch the app list: {e:#}");
                None
            }
        }
    }
}
