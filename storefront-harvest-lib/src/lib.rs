#![doc(hidden)]

//! Core library for storefront-harvest
//!
//! This library consolidates all functionality for the storefront-harvest tool, which collects
//! catalog metadata for marketplace apps and PC games and persists it as JSON documents for an
//! external report renderer.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`harvest`]: Marketplace collection pipeline
//! - [`catalog`]: Alternate game catalog loading with fallback strategies

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod catalog;
#[cfg(not(any(debug_assertions, test)))]
mod catalog;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod harvest;
#[cfg(not(any(debug_assertions, test)))]
mod harvest;

pub use crate::commands::{Host, run};
