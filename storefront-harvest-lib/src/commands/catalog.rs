use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::harvest::persist;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::app_err;
use std::io::Write;

/// File name of the catalog document written by `catalog`
pub const CATALOG_OUTPUT_FILE: &str = "steam_catalog.json";

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory searched for cached catalog files (overrides the configuration)
    #[arg(long, value_name = "PATH")]
    pub base_dir: Option<Utf8PathBuf>,
}

/// Load the game catalog from the first available source and write it.
///
/// # Errors
///
/// Returns an error if every source failed or the document cannot be written
pub async fn process_catalog<H: Host>(host: &mut H, args: &CatalogArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let loader = common.loader(args.base_dir.as_deref())?;

    let Some(doc) = loader.load(Utc::now()).await else {
        let _ = writeln!(host.error(), "No catalog source could be loaded");
        host.exit(1);
        return Err(app_err!("every catalog source failed"));
    };

    let path = common.output_path(CATALOG_OUTPUT_FILE);
    persist(&doc, &path)?;

    let _ = writeln!(
        host.output(),
        "Wrote {} games from {} into {path}",
        doc.top_games.len(),
        doc.metadata.source
    );
    if doc.is_degraded() {
        let _ = writeln!(host.error(), "Catalog is degraded: only ids and names are available");
    }
    Ok(())
}
