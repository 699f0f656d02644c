use super::marketplace::{Collection, Marketplace};
use super::{
    AggregateDocument, FacetPlan, FacetResult, Fetcher, ItemId, ItemRecord, RunMetadata, Seeds, build_record, cache_doc,
    enumerate,
};
use crate::Result;
use chrono::{DateTime, Utc};
use ohno::bail;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

const LOG_TARGET: &str = " collector";

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

/// Settings of the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullPlan {
    pub seeds: Seeds,
    pub cap: usize,
    pub facets: FacetPlan,

    /// Terms whose search suggestions are recorded in the run metadata.
    pub suggestion_terms: Vec<String>,
}

impl Default for FullPlan {
    fn default() -> Self {
        Self {
            seeds: Seeds {
                queries: strings(&["game", "social", "productivity"]),
                query_limit: 15,
                categories: strings(&["GAME", "SOCIAL", "PRODUCTIVITY"]),
                category_limit: 10,
                collection: Collection::TopFree,
            },
            cap: 30,
            facets: FacetPlan::default(),
            suggestion_terms: strings(&["game", "social"]),
        }
    }
}

/// Settings of the simplified, detail-only pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPlan {
    pub seeds: Seeds,
    pub cap: Option<usize>,
}

impl Default for QuickPlan {
    fn default() -> Self {
        Self {
            seeds: Seeds {
                queries: strings(&["game", "social", "productivity", "entertainment", "education"]),
                query_limit: 20,
                categories: strings(&["GAME", "SOCIAL", "PRODUCTIVITY", "ENTERTAINMENT"]),
                category_limit: 10,
                collection: Collection::TopFree,
            },
            cap: None,
        }
    }
}

/// Drives a collection run from seed discovery to the assembled output.
#[derive(Debug)]
pub struct Collector<M> {
    fetcher: Fetcher<M>,
    full: FullPlan,
    quick: QuickPlan,
}

impl<M: Marketplace> Collector<M> {
    #[must_use]
    pub fn new(fetcher: Fetcher<M>) -> Self {
        Self {
            fetcher,
            full: FullPlan::default(),
            quick: QuickPlan::default(),
        }
    }

    #[must_use]
    pub fn with_full_plan(mut self, plan: FullPlan) -> Self {
        self.full = plan;
        self
    }

    #[must_use]
    pub fn with_quick_plan(mut self, plan: QuickPlan) -> Self {
        self.quick = plan;
        self
    }

    #[must_use]
    pub const fn fetcher(&self) -> &Fetcher<M> {
        &self.fetcher
    }

    /// Run the full pipeline and assemble the aggregate document.
    ///
    /// # Errors
    ///
    /// Fails when candidates were discovered but every one of them was dropped.
    pub async fn collect_full(&self, now: DateTime<Utc>) -> Result<AggregateDocument> {
        let plan = &self.full;

        log::info!(target: LOG_TARGET, "Fetching the category catalog");
        let categories: FacetResult<Vec<String>> = self.fetcher.categories().await.map_err(|e| e.message().to_string()).into();
        if let FacetResult::Unavailable(reason) = &categories {
            log::warn!(target: LOG_TARGET, "Category catalog unavailable: {reason}");
        }

        let candidates = enumerate(&self.fetcher, &plan.seeds, plan.cap).await;

        let mut items = Vec::with_capacity(candidates.len());
        let discovered = candidates.len();
        for (index, id) in candidates.into_iter().enumerate() {
            log::info!(target: LOG_TARGET, "Collecting item {}/{discovered}: {id}", index + 1);
            match build_record(&self.fetcher, &id, &plan.facets).await {
                Ok(record) => items.push(record),
                Err(e) => log::warn!(target: LOG_TARGET, "Dropping '{id}': {e}"),
            }
            self.fetcher.pause_between_items().await;
        }

        ensure_survivors(discovered, items.len())?;

        let mut suggestions = BTreeMap::new();
        for term in &plan.suggestion_terms {
            match self.fetcher.suggest(term).await {
                Ok(found) => {
                    let _ = suggestions.insert(term.clone(), found);
                }
                Err(e) => log::warn!(target: LOG_TARGET, "No suggestions for '{term}': {e}"),
            }
        }

        log::info!(target: LOG_TARGET, "Collected {} of {discovered} items", items.len());
        Ok(AggregateDocument::build(items, RunMetadata::new(now, categories, suggestions)))
    }

    /// Run the simplified pipeline: discovery plus the detail facet only.
    ///
    /// # Errors
    ///
    /// Fails when candidates were discovered but every one of them was dropped.
    pub async fn collect_quick(&self) -> Result<Vec<ItemRecord>> {
        let plan = &self.quick;
        let candidates = enumerate(&self.fetcher, &plan.seeds, plan.cap.unwrap_or(usize::MAX)).await;

        let discovered = candidates.len();
        let mut records = Vec::with_capacity(discovered);
        for id in candidates {
            if let Some(record) = self.detail_only(id).await {
                records.push(record);
            }
            self.fetcher.pause_between_items().await;
        }

        ensure_survivors(discovered, records.len())?;
        log::info!(target: LOG_TARGET, "Collected {} of {discovered} items", records.len());
        Ok(records)
    }

    async fn detail_only(&self, id: ItemId) -> Option<ItemRecord> {
        match self.fetcher.detail(&id).await {
            Ok(detail) => Some(ItemRecord::detail_only(id, detail)),
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Dropping '{id}': {e}");
                None
            }
        }
    }
}

/// Write `value` to `path` as pretty JSON, once.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn persist<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    cache_doc::save(value, path)?;
    log::info!(target: LOG_TARGET, "Saved '{}'", path.display());
    Ok(())
}

fn ensure_survivors(discovered: usize, survived: usize) -> Result<()> {
    if discovered > 0 && survived == 0 {
        bail!("all {discovered} discovered items failed their detail fetch");
    }
    Ok(())
}
