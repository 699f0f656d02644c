use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::harvest::persist;
use chrono::Utc;
use clap::Parser;
use std::io::Write;

/// File name of the aggregate document written by `collect`
pub const FULL_OUTPUT_FILE: &str = "google_play_full_data.json";

#[derive(Parser, Debug)]
pub struct CollectArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the full pipeline and write the aggregate document.
///
/// # Errors
///
/// Returns an error if no item could be collected or the document cannot be written
pub async fn process_collect<H: Host>(host: &mut H, args: &CollectArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let collector = common.collector()?;

    let doc = match collector.collect_full(Utc::now()).await {
        Ok(doc) => doc,
        Err(e) => {
            let _ = writeln!(host.error(), "Collection failed: {e:#}");
            return Err(e);
        }
    };

    let path = common.output_path(FULL_OUTPUT_FILE);
    persist(&doc, &path)?;

    let _ = writeln!(host.output(), "Collected {} items into {path}", doc.metadata().total_items);
    Ok(())
}
