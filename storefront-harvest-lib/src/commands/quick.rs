use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::harvest::persist;
use clap::Parser;
use std::io::Write;

/// File name of the record list written by `quick`
pub const QUICK_OUTPUT_FILE: &str = "google_play_apps.json";

#[derive(Parser, Debug)]
pub struct QuickArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the detail-only pipeline and write the flat record list.
///
/// # Errors
///
/// Returns an error if no item could be collected or the list cannot be written
pub async fn process_quick<H: Host>(host: &mut H, args: &QuickArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let collector = common.collector()?;

    let records = match collector.collect_quick().await {
        Ok(records) => records,
        Err(e) => {
            let _ = writeln!(host.error(), "Collection failed: {e:#}");
            return Err(e);
        }
    };

    let path = common.output_path(QUICK_OUTPUT_FILE);
    persist(&records, &path)?;

    let _ = writeln!(host.output(), "Collected {} items into {path}", records.len());
    Ok(())
}
