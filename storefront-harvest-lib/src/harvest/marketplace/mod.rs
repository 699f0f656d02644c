//! Access to a marketplace's public catalog operations.
//!
//! [`Marketplace`] is the seam between the collection pipeline and the network. The
//! production implementation, [`HttpMarketplace`], talks to a JSON gateway; tests
//! substitute in-memory implementations.

mod client;
mod types;

pub use client::{HttpMarketplace, Locale};
pub use types::{AppDetail, AppSummary, DataEntry, DataSafety, Permission, Review, SecurityPractice};

use super::ItemId;
use crate::Result;
use serde::{Deserialize, Serialize};
use strum::Display;

/// A ranked collection within a category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Collection {
    #[default]
    TopFree,
    TopPaid,
    Grossing,
}

/// Ordering applied when fetching reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewSort {
    #[default]
    Newest,
    Rating,
    Helpfulness,
}

/// Read-only, unauthenticated operations offered by a marketplace.
pub trait Marketplace: Send + Sync {
    /// Search the catalog by free-text term.
    fn search(&self, term: &str, num: usize) -> impl Future<Output = Result<Vec<AppSummary>>> + Send;

    /// List the top entries of a category.
    fn list(&self, category: &str, collection: Collection, num: usize) -> impl Future<Output = Result<Vec<AppSummary>>> + Send;

    /// Full detail of one entry.
    fn app(&self, id: &ItemId) -> impl Future<Output = Result<AppDetail>> + Send;

    /// User reviews of one entry.
    fn reviews(&self, id: &ItemId, sort: ReviewSort, num: usize) -> impl Future<Output = Result<Vec<Review>>> + Send;

    /// Entries the marketplace considers similar to one entry.
    fn similar(&self, id: &ItemId) -> impl Future<Output = Result<Vec<AppSummary>>> + Send;

    /// Permissions requested by one entry.
    fn permissions(&self, id: &ItemId) -> impl Future<Output = Result<Vec<Permission>>> + Send;

    /// Data-safety declaration of one entry.
    fn data_safety(&self, id: &ItemId) -> impl Future<Output = Result<DataSafety>> + Send;

    /// Entries published by one developer.
    fn developer(&self, developer_id: &str) -> impl Future<Output = Result<Vec<AppSummary>>> + Send;

    /// The marketplace's category catalog.
    fn categories(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Search suggestions for a term.
    fn suggest(&self, term: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}
