//! Alternate game catalog loading
//!
//! The game catalog has no single dependable source. [`Loader`] tries a local cache file,
//! then a set of candidate files on a raw-file host, then the public app-list endpoint,
//! and returns the first document it manages to obtain. The last strategy only yields
//! identifiers and names, so the document it produces is explicitly marked degraded.

mod catalog_document;
mod client;
mod loader;
mod strategy_chain;

pub use catalog_document::{CatalogDocument, CatalogGame, CatalogMetadata, CatalogSource, CatalogStatistics, PlatformCounts, PlatformSupport, SteamApp};
pub use client::CatalogClient;
pub use loader::{Loader, LoaderPaths};
pub use strategy_chain::StrategyChain;
