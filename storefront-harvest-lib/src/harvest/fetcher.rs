use super::marketplace::{AppDetail, AppSummary, Collection, DataSafety, Marketplace, Permission, Review, ReviewSort};
use super::{ItemId, Pacing};
use core::fmt::{Display, Formatter, Result as FmtResult};
use strum::{Display as StrumDisplay, EnumIter, IntoStaticStr};

/// The individual requests the fetcher knows how to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Search,
    List,
    Detail,
    Reviews,
    Similar,
    Permissions,
    DataSafety,
    Developer,
    Categories,
    Suggest,
}

impl Operation {
    /// Seed operations discover candidates; everything else enriches them.
    #[must_use]
    pub const fn is_seed(self) -> bool {
        matches!(self, Self::Search | Self::List)
    }
}

/// A failed request: which operation, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    operation: Operation,
    message: String,
}

impl FetchError {
    #[must_use]
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

impl core::error::Error for FetchError {}

/// Issues marketplace requests one at a time, pausing after each.
#[derive(Debug)]
pub struct Fetcher<M> {
    marketplace: M,
    pacing: Pacing,
}

impl<M: Marketplace> Fetcher<M> {
    #[must_use]
    pub const fn new(marketplace: M, pacing: Pacing) -> Self {
        Self { marketplace, pacing }
    }

    #[must_use]
    pub const fn marketplace(&self) -> &M {
        &self.marketplace
    }

    #[must_use]
    pub const fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Await one request, then the operation's delay, regardless of the outcome.
    async fn paced<T>(&self, operation: Operation, request: impl Future<Output = crate::Result<T>>) -> Result<T, FetchError> {
        let result = request.await;
        self.pacing.after(operation).await;
        result.map_err(|e| FetchError::new(operation, format!("{e:#}")))
    }

    pub async fn search(&self, term: &str, num: usize) -> Result<Vec<AppSummary>, FetchError> {
        self.paced(Operation::Search, self.marketplace.search(term, num)).await
    }

    pub async fn list(&self, category: &str, collection: Collection, num: usize) -> Result<Vec<AppSummary>, FetchError> {
        self.paced(Operation::List, self.marketplace.list(category, collection, num)).await
    }

    pub async fn detail(&self, id: &ItemId) -> Result<AppDetail, FetchError> {
        self.paced(Operation::Detail, self.marketplace.app(id)).await
    }

    pub async fn reviews(&self, id: &ItemId, sort: ReviewSort, num: usize) -> Result<Vec<Review>, FetchError> {
        self.paced(Operation::Reviews, self.marketplace.reviews(id, sort, num)).await
    }

    pub async fn similar(&self, id: &ItemId) -> Result<Vec<AppSummary>, FetchError> {
        self.paced(Operation::Similar, self.marketplace.similar(id)).await
    }

    pub async fn permissions(&self, id: &ItemId) -> Result<Vec<Permission>, FetchError> {
        self.paced(Operation::Permissions, self.marketplace.permissions(id)).await
    }

    pub async fn data_safety(&self, id: &ItemId) -> Result<DataSafety, FetchError> {
        self.paced(Operation::DataSafety, self.marketplace.data_safety(id)).await
    }

    pub async fn developer(&self, developer_id: &str) -> Result<Vec<AppSummary>, FetchError> {
        self.paced(Operation::Developer, self.marketplace.developer(developer_id)).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, FetchError> {
        self.paced(Operation::Categories, self.marketplace.categories()).await
    }

    pub async fn suggest(&self, term: &str) -> Result<Vec<String>, FetchError> {
        self.paced(Operation::Suggest, self.marketplace.suggest(term)).await
    }

    /// Apply the inter-item delay.
    pub async fn pause_between_items(&self) {
        self.pacing.between_items().await;
    }
}
