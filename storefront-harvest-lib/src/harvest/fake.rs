//! In-memory marketplace for unit tests.

use super::marketplace::{AppDetail, AppSummary, Collection, DataSafety, Marketplace, Permission, Review, ReviewSort};
use super::{ItemId, Operation};
use crate::Result;
use ohno::bail;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeMarketplace {
    searches: HashMap<String, Vec<ItemId>>,
    lists: HashMap<String, Vec<ItemId>>,
    apps: HashMap<ItemId, AppDetail>,
    developers: HashMap<String, Vec<ItemId>>,
    categories: Option<Vec<String>>,
    suggestions: HashMap<String, Vec<String>>,
    failures: HashSet<(Operation, String)>,
    calls: Mutex<Vec<(Operation, String)>>,
}

pub fn summary(id: &ItemId) -> AppSummary {
    AppSummary {
        app_id: id.clone(),
        title: format!("title of {id}"),
        developer: None,
        developer_id: None,
        score: Some(4.0),
        price: 0.0,
        free: true,
        icon: None,
    }
}

pub fn detail(title: &str) -> AppDetail {
    AppDetail {
        title: title.to_string(),
        summary: None,
        description: None,
        developer: format!("{title} Studio"),
        developer_id: None,
        developer_email: None,
        developer_website: None,
        score: Some(4.5),
        ratings: Some(100),
        review_count: Some(40),
        histogram: BTreeMap::from([("1".to_string(), 5), ("5".to_string(), 95)]),
        installs: Some("1,000+".to_string()),
        min_installs: Some(1000),
        price: 0.0,
        free: true,
        currency: Some("KRW".to_string()),
        genre: Some("Tools".to_string()),
        genre_id: Some("TOOLS".to_string()),
        content_rating: None,
        released: None,
        updated: None,
        version: None,
        icon: None,
        ad_supported: None,
        offers_iap: None,
    }
}

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().copied().map(ItemId::from).collect()
}

impl FakeMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str, found: &[&str]) -> Self {
        let _ = self.searches.insert(term.to_string(), ids(found));
        self
    }

    pub fn fail_search(self, term: &str) -> Self {
        self.fail(Operation::Search, term)
    }

    pub fn with_list(mut self, category: &str, found: &[&str]) -> Self {
        let _ = self.lists.insert(category.to_string(), ids(found));
        self
    }

    pub fn with_app(self, id: &str, title: &str) -> Self {
        self.with_app_detail(id, detail(title))
    }

    pub fn with_app_detail(mut self, id: &str, detail: AppDetail) -> Self {
        let _ = self.apps.insert(ItemId::from(id), detail);
        self
    }

    pub fn with_developer(mut self, developer_id: &str, apps: &[&str]) -> Self {
        let _ = self.developers.insert(developer_id.to_string(), ids(apps));
        self
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = Some(categories.iter().map(ToString::to_string).collect());
        self
    }

    pub fn with_suggestions(mut self, term: &str, suggestions: &[&str]) -> Self {
        let _ = self
            .suggestions
            .insert(term.to_string(), suggestions.iter().map(ToString::to_string).collect());
        self
    }

    /// Make `operation` fail when called with `key` (an item id, term, or category).
    pub fn fail(mut self, operation: Operation, key: &str) -> Self {
        let _ = self.failures.insert((operation, key.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(Operation, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: Operation, key: &str) -> Result<()> {
        self.calls.lock().unwrap().push((operation, key.to_string()));
        if self.failures.contains(&(operation, key.to_string())) {
            bail!("simulated {operation} failure for '{key}'");
        }
        Ok(())
    }
}

impl Marketplace for FakeMarketplace {
    async fn search(&self, term: &str, num: usize) -> Result<Vec<AppSummary>> {
        self.record(Operation::Search, term)?;
        let found = self.searches.get(term).map(Vec::as_slice).unwrap_or_default();
        Ok(found.iter().take(num).map(summary).collect())
    }

    async fn list(&self, category: &str, _collection: Collection, num: usize) -> Result<Vec<AppSummary>> {
        self.record(Operation::List, category)?;
        let found = self.lists.get(category).map(Vec::as_slice).unwrap_or_default();
        Ok(found.iter().take(num).map(summary).collect())
    }

    async fn app(&self, id: &ItemId) -> Result<AppDetail> {
        self.record(Operation::Detail, id.as_str())?;
        match self.apps.get(id) {
            Some(detail) => Ok(detail.clone()),
            None => bail!("no such app '{id}'"),
        }
    }

    async fn reviews(&self, id: &ItemId, _sort: ReviewSort, num: usize) -> Result<Vec<Review>> {
        self.record(Operation::Reviews, id.as_str())?;
        Ok((0..2)
            .take(num)
            .map(|i| Review {
                id: format!("{id}-review-{i}"),
                user_name: Some(format!("user{i}")),
                date: None,
                score: 5,
                text: Some("great".to_string()),
                thumbs_up: i,
                reply_text: None,
            })
            .collect())
    }

    async fn similar(&self, id: &ItemId) -> Result<Vec<AppSummary>> {
        self.record(Operation::Similar, id.as_str())?;
        Ok(vec![summary(&ItemId::new(format!("{id}.similar")))])
    }

    async fn permissions(&self, id: &ItemId) -> Result<Vec<Permission>> {
        self.record(Operation::Permissions, id.as_str())?;
        Ok(vec![Permission {
            permission: "full network access".to_string(),
            kind: "Other".to_string(),
        }])
    }

    async fn data_safety(&self, id: &ItemId) -> Result<DataSafety> {
        self.record(Operation::DataSafety, id.as_str())?;
        Ok(DataSafety {
            privacy_policy_url: Some(format!("https://example.com/{id}/privacy")),
            ..DataSafety::default()
        })
    }

    async fn developer(&self, developer_id: &str) -> Result<Vec<AppSummary>> {
        self.record(Operation::Developer, developer_id)?;
        match self.developers.get(developer_id) {
            Some(apps) => Ok(apps.iter().map(summary).collect()),
            None => bail!("unknown developer '{developer_id}'"),
        }
    }

    async fn categories(&self) -> Result<Vec<String>> {
        self.record(Operation::Categories, "")?;
        match &self.categories {
            Some(categories) => Ok(categories.clone()),
            None => bail!("category catalog unavailable"),
        }
    }

    async fn suggest(&self, term: &str) -> Result<Vec<String>> {
        self.record(Operation::Suggest, term)?;
        match self.suggestions.get(term) {
            Some(suggestions) => Ok(suggestions.clone()),
            None => bail!("no suggestions for '{term}'"),
        }
    }
}
