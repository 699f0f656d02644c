use super::marketplace::{AppDetail, AppSummary, DataSafety, Permission, Review};
use super::{FacetResult, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything collected about one catalog item.
///
/// The core detail fields are always present: a record only exists if its detail fetch
/// succeeded. Every optional facet is an explicit [`FacetResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: ItemId,

    #[serde(flatten)]
    pub detail: AppDetail,

    pub reviews: FacetResult<ReviewsFacet>,
    pub similar: FacetResult<Vec<AppSummary>>,
    pub permissions: FacetResult<Vec<Permission>>,
    pub data_safety: FacetResult<DataSafety>,
    pub developer_profile: FacetResult<DeveloperProfile>,
}

impl ItemRecord {
    /// A record carrying only the core detail, with every optional facet skipped.
    #[must_use]
    pub const fn detail_only(id: ItemId, detail: AppDetail) -> Self {
        Self {
            id,
            detail,
            reviews: FacetResult::Skipped,
            similar: FacetResult::Skipped,
            permissions: FacetResult::Skipped,
            data_safety: FacetResult::Skipped,
            developer_profile: FacetResult::Skipped,
        }
    }

    /// Whether every optional facet was found.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.reviews.is_found()
            && self.similar.is_found()
            && self.permissions.is_found()
            && self.data_safety.is_found()
            && self.developer_profile.is_found()
    }
}

/// Reviews of one item plus a summary derived from its detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsFacet {
    pub reviews: Vec<Review>,
    pub summary: ReviewsSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsSummary {
    /// Number of reviews collected (not the marketplace-wide total).
    pub total: usize,
    pub average_rating: f64,
    pub rating_distribution: BTreeMap<String, u64>,
}

impl ReviewsFacet {
    #[must_use]
    pub fn new(reviews: Vec<Review>, detail: &AppDetail) -> Self {
        let summary = ReviewsSummary {
            total: reviews.len(),
            average_rating: detail.score.unwrap_or_default(),
            rating_distribution: detail.histogram.clone(),
        };
        Self { reviews, summary }
    }
}

/// Summary of the developer who published an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperProfile {
    pub name: String,

    /// Number of apps the developer listing returned.
    pub apps: usize,
    pub top_apps: Vec<DeveloperApp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApp {
    pub title: String,
    pub app_id: ItemId,
    pub score: Option<f64>,
}

impl DeveloperProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, listing: &[AppSummary], top: usize) -> Self {
        Self {
            name: name.into(),
            apps: listing.len(),
            top_apps: listing
                .iter()
                .take(top)
                .map(|app| DeveloperApp {
                    title: app.title.clone(),
                    app_id: app.app_id.clone(),
                    score: app.score,
                })
                .collect(),
        }
    }
}
