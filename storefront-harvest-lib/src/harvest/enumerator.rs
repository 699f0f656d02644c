use super::marketplace::{AppSummary, Collection, Marketplace};
use super::{CandidateSet, FetchError, Fetcher};

const LOG_TARGET: &str = "enumerator";

/// Seed queries and categories used to discover candidate items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeds {
    pub queries: Vec<String>,
    pub query_limit: usize,
    pub categories: Vec<String>,
    pub category_limit: usize,
    pub collection: Collection,
}

/// Discover candidate identifiers from every seed, deduplicated and capped.
///
/// Queries are searched first, then categories are listed, each in the given order.
/// A failing seed is logged and contributes nothing. Once every seed has been tried,
/// the set is truncated to `cap` entries by discovery order.
pub async fn enumerate<M: Marketplace>(fetcher: &Fetcher<M>, seeds: &Seeds, cap: usize) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    for query in &seeds.queries {
        log::info!(target: LOG_TARGET, "Searching for '{query}'");
        let found = fetcher.search(query, seeds.query_limit).await;
        merge(&mut candidates, &format!("search '{query}'"), found);
    }

    for category in &seeds.categories {
        log::info!(target: LOG_TARGET, "Listing {} of category {category}", seeds.collection);
        let found = fetcher.list(category, seeds.collection, seeds.category_limit).await;
        merge(&mut candidates, &format!("category {category}"), found);
    }

    if candidates.len() > cap {
        log::info!(target: LOG_TARGET, "Discovered {} candidates, keeping the first {cap}", candidates.len());
        candidates.truncate(cap);
    } else {
        log::info!(target: LOG_TARGET, "Discovered {} candidates", candidates.len());
    }

    candidates
}

fn merge(candidates: &mut CandidateSet, seed: &str, found: Result<Vec<AppSummary>, FetchError>) {
    match found {
        Ok(summaries) => {
            let total = summaries.len();
            let added = candidates.extend(summaries.into_iter().map(|s| s.app_id));
            log::debug!(target: LOG_TARGET, "{seed}: {total} results, {added} new");
        }
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Skipping {seed}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harvest::fake::FakeMarketplace;
    use crate::harvest::{ItemId, Operation, Pacing};

    fn seeds(queries: &[&str], categories: &[&str]) -> Seeds {
        Seeds {
            queries: queries.iter().map(ToString::to_string).collect(),
            query_limit: 50,
            categories: categories.iter().map(ToString::to_string).collect(),
            category_limit: 50,
            collection: Collection::TopFree,
        }
    }

    fn as_strings(set: &CandidateSet) -> Vec<String> {
        set.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_overlapping_seeds_are_deduplicated() {
        let fake = FakeMarketplace::new()
            .with_search("game", &["a", "b", "c"])
            .with_search("social", &["c", "d", "e"]);
        let fetcher = Fetcher::new(fake, Pacing::NONE);

        let candidates = enumerate(&fetcher, &seeds(&["game", "social"], &[]), 30).await;

        assert_eq!(candidates.len(), 5);
        assert_eq!(as_strings(&candidates), ["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_queries_then_categories() {
        let fake = FakeMarketplace::new()
            .with_search("game", &["a"])
            .with_list("SOCIAL", &["b", "a"]);
        let fetcher = Fetcher::new(fake, Pacing::NONE);

        let candidates = enumerate(&fetcher, &seeds(&["game"], &["SOCIAL"]), 30).await;

        assert_eq!(as_strings(&candidates), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_failed_seed_does_not_stop_enumeration() {
        let fake = FakeMarketplace::new()
            .fail_search("game")
            .with_search("social", &["x"])
            .fail(Operation::List, "GAME")
            .with_list("SOCIAL", &["y"]);
        let fetcher = Fetcher::new(fake, Pacing::NONE);

        let candidates = enumerate(&fetcher, &seeds(&["game", "social"], &["GAME", "SOCIAL"]), 30).await;

        assert_eq!(as_strings(&candidates), ["x", "y"]);
    }

    #[tokio::test]
    async fn test_cap_keeps_first_discovered() {
        let first: Vec<String> = (0..20).map(|i| format!("s{i}")).collect();
        let second: Vec<String> = (0..20).map(|i| format!("t{i}")).collect();
        let first_refs: Vec<&str> = first.iter().map(String::as_str).collect();
        let second_refs: Vec<&str> = second.iter().map(String::as_str).collect();

        let fake = FakeMarketplace::new()
            .with_search("one", &first_refs)
            .with_search("two", &second_refs);
        let fetcher = Fetcher::new(fake, Pacing::NONE);

        let candidates = enumerate(&fetcher, &seeds(&["one", "two"], &[]), 30).await;

        assert_eq!(candidates.len(), 30);
        let kept = as_strings(&candidates);
        assert_eq!(&kept[..20], first.as_slice());
        assert_eq!(&kept[20..], &second[..10]);
        assert!(!candidates.contains(&ItemId::from("t10")));
    }

    #[tokio::test]
    async fn test_every_seed_is_attempted_in_order() {
        let fake = FakeMarketplace::new();
        let fetcher = Fetcher::new(fake, Pacing::NONE);

        let candidates = enumerate(&fetcher, &seeds(&["q1", "q2"], &["C1"]), 30).await;
        assert!(candidates.is_empty());

        assert_eq!(
            fetcher.marketplace().calls(),
            vec![
                (Operation::Search, "q1".to_string()),
                (Operation::Search, "q2".to_string()),
                (Operation::List, "C1".to_string()),
            ]
        );
    }
}
