use super::marketplace::{Marketplace, ReviewSort};
use super::{DeveloperProfile, FacetResult, FetchError, Fetcher, ItemId, ItemRecord, ReviewsFacet};

const LOG_TARGET: &str = "aggregator";

/// Which optional facets to request and how much of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetPlan {
    pub reviews_limit: usize,
    pub review_sort: ReviewSort,
    pub developer_top_apps: usize,
}

impl Default for FacetPlan {
    fn default() -> Self {
        Self {
            reviews_limit: 50,
            review_sort: ReviewSort::Newest,
            developer_top_apps: 5,
        }
    }
}

/// Build the record for one item.
///
/// The detail fetch is mandatory and its failure is returned to the caller. Optional
/// facets are then fetched in a fixed order (reviews, similar, permissions, data safety,
/// developer profile), each failing independently into [`FacetResult::Unavailable`].
/// The developer profile is only requested when the detail names a developer id.
pub async fn build_record<M: Marketplace>(fetcher: &Fetcher<M>, id: &ItemId, plan: &FacetPlan) -> Result<ItemRecord, FetchError> {
    let detail = fetcher.detail(id).await?;
    log::info!(target: LOG_TARGET, "Collecting facets of '{}' ({id})", detail.title);

    let reviews = facet(id, fetcher.reviews(id, plan.review_sort, plan.reviews_limit).await)
        .map(|reviews| ReviewsFacet::new(reviews, &detail));
    let similar = facet(id, fetcher.similar(id).await);
    let permissions = facet(id, fetcher.permissions(id).await);
    let data_safety = facet(id, fetcher.data_safety(id).await);

    let developer_profile = match detail.developer_id.as_deref() {
        Some(developer_id) => facet(id, fetcher.developer(developer_id).await)
            .map(|listing| DeveloperProfile::new(detail.developer.clone(), &listing, plan.developer_top_apps)),
        None => {
            log::debug!(target: LOG_TARGET, "'{id}' has no developer id, skipping developer profile");
            FacetResult::Skipped
        }
    };

    Ok(ItemRecord {
        id: id.clone(),
        detail,
        reviews,
        similar,
        permissions,
        data_safety,
        developer_profile,
    })
}

fn facet<T>(id: &ItemId, result: Result<T, FetchError>) -> FacetResult<T> {
    if let Err(e) = &result {
        log::warn!(target: LOG_TARGET, "'{id}': {e}");
    }

    result.map_err(|e| e.message().to_string()).into()
}
