//! Command-line interface for storefront-harvest
//!
//! This module parses the command line, loads configuration, wires the collection
//! pipeline to real network clients, and writes each command's output document.
//!
//! ## Commands
//!
//! - **collect**: Run the full marketplace pipeline and write the aggregate document
//! - **quick**: Run the detail-only marketplace pipeline and write the flat record list
//! - **catalog**: Load the PC game catalog through its fallback chain and write it
//! - **init**: Generate a default configuration file
//!
//! Configuration is read from `harvest.toml` (or the file given with `--config`); every
//! setting has a built-in default, so the tool runs without any configuration file.

mod catalog;
mod collect;
mod common;
mod config;
mod host;
mod init;
mod quick;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use catalog::{CATALOG_OUTPUT_FILE, CatalogArgs, process_catalog};
pub use collect::{CollectArgs, FULL_OUTPUT_FILE, process_collect};
pub use common::{CommonArgs, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use quick::{QUICK_OUTPUT_FILE, QuickArgs, process_quick};
pub use run::run;
