//! Marketplace data collection and aggregation
//!
//! This module gathers catalog metadata for marketplace apps. Candidate identifiers are
//! discovered from a handful of seed searches and category listings, and each candidate is
//! then enriched with a fixed set of independently fetched facets.
//!
//! # Implementation Model
//!
//! - [`Fetcher`] issues one request at a time against a [`Marketplace`] and applies a
//!   cooperative delay after every call.
//! - [`enumerate`] merges seed results into a discovery-ordered [`CandidateSet`].
//! - [`build_record`] fetches the mandatory detail facet and then every optional facet,
//!   wrapping each outcome in a [`FacetResult`] so that one failure never aborts the item.
//! - [`AggregateDocument`] assembles the surviving [`ItemRecord`]s with [`RunMetadata`].
//! - [`Collector`] drives the whole pipeline and persists its output.
//!
//! Everything runs sequentially: seed by seed, item by item, facet by facet.

mod aggregator;
pub mod cache_doc;
mod candidate_set;
mod collector;
mod document;
mod enumerator;
mod facet_result;
mod fetcher;
mod item_id;
mod item_record;
pub mod marketplace;
mod pacing;

#[cfg(test)]
mod fake;

pub use aggregator::{FacetPlan, build_record};
pub use candidate_set::CandidateSet;
pub use collector::{Collector, FullPlan, QuickPlan, persist};
pub use document::{AggregateDocument, RunMetadata};
pub use enumerator::{Seeds, enumerate};
pub use facet_result::FacetResult;
pub use fetcher::{FetchError, Fetcher, Operation};
pub use item_id::ItemId;
pub use item_record::{DeveloperApp, DeveloperProfile, ItemRecord, ReviewsFacet, ReviewsSummary};
pub use marketplace::{HttpMarketplace, Marketplace};
pub use pacing::Pacing;
