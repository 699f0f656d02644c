//! Reading and writing JSON documents on disk.

use crate::Result;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const LOG_TARGET: &str = " cache_doc";

/// Load a document from a file
pub fn load<T>(path: impl AsRef<Path>, context: impl AsRef<str>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = path.as_ref();
    let ctx = context.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!(target: LOG_TARGET, "No {ctx} at '{}': {e:#}", path.display());
            return Err(e).into_app_err_with(|| format!("unable to open file '{}'", path.display()));
        }
    };

    let reader = BufReader::new(file);
    let data = match serde_json::from_reader(reader) {
        Ok(data) => data,
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Unreadable {ctx} at '{}': {e:#}", path.display());
            return Err(e).into_app_err_with(|| format!("unable to parse file '{}'", path.display()));
        }
    };

    log::debug!(target: LOG_TARGET, "Loaded {ctx} from '{}'", path.display());

    Ok(data)
}

/// Save a document to a file as pretty-printed JSON, creating the parent directory.
pub fn save<T>(data: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_app_err_with(|| format!("unable to create directory '{}'", parent.display()))?;
    }

    let file = File::create(path).into_app_err_with(|| format!("unable to create file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).into_app_err_with(|| format!("unable to write file '{}'", path.display()))?;
    writer
        .flush()
        .into_app_err_with(|| format!("unable to flush file '{}'", path.display()))?;

    log::debug!(target: LOG_TARGET, "Wrote '{}'", path.display());
    Ok(())
}
