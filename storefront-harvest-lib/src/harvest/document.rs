use super::{FacetResult, ItemRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Run-level facts recorded alongside the collected items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub collected_at: DateTime<Utc>,
    pub total_items: usize,
    pub categories: FacetResult<Vec<String>>,

    /// Suggestions per seed term. Terms whose suggestion fetch failed are omitted.
    pub suggestions: BTreeMap<String, Vec<String>>,
}

impl RunMetadata {
    #[must_use]
    pub const fn new(collected_at: DateTime<Utc>, categories: FacetResult<Vec<String>>, suggestions: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            collected_at,
            total_items: 0,
            categories,
            suggestions,
        }
    }
}

/// The final output of a full collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateDocument {
    metadata: RunMetadata,
    items: Vec<ItemRecord>,
}

impl AggregateDocument {
    /// Assemble the document, keeping `items` in the given order.
    #[must_use]
    pub fn build(items: Vec<ItemRecord>, mut metadata: RunMetadata) -> Self {
        metadata.total_items = items.len();
        Self { metadata, items }
    }

    #[must_use]
    pub const fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }
}
