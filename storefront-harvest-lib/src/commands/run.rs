//! Command dispatch logic for storefront-harvest

use super::{CatalogArgs, CollectArgs, InitArgs, QuickArgs, init_config, process_catalog, process_collect, process_quick};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "storefront-harvest", author, version, long_about = None)]
#[command(about = "Harvest marketplace app and PC game catalog metadata into JSON documents")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: HarvestSubcommand,
}

#[derive(Subcommand, Debug)]
enum HarvestSubcommand {
    /// Collect every facet of the top marketplace apps into an aggregate document
    Collect(CollectArgs),
    /// Collect only the core details of a broader set of marketplace apps
    Quick(QuickArgs),
    /// Load the PC game catalog from the first available source
    Catalog(CatalogArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        HarvestSubcommand::Collect(collect_args) => process_collect(host, collect_args).await,
        HarvestSubcommand::Quick(quick_args) => process_quick(host, quick_args).await,
        HarvestSubcommand::Catalog(catalog_args) => process_catalog(host, catalog_args).await,
        HarvestSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_shared_flags() {
        let cli = Cli::parse_from(["storefront-harvest", "collect", "--config", "h.toml", "--output-dir", "out", "--log-level", "info"]);
        let HarvestSubcommand::Collect(args) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.common.config.as_deref().map(camino::Utf8Path::as_str), Some("h.toml"));
        assert_eq!(args.common.output_dir.as_deref().map(camino::Utf8Path::as_str), Some("out"));
    }

    #[test]
    fn test_parses_catalog_base_dir() {
        let cli = Cli::parse_from(["storefront-harvest", "catalog", "--base-dir", "cache"]);
        let HarvestSubcommand::Catalog(args) = cli.command else {
            panic!("expected catalog");
        };
        assert_eq!(args.base_dir.as_deref().map(camino::Utf8Path::as_str), Some("cache"));
        assert!(args.common.config.is_none());
    }
}
