use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregator::AggregatedResult;
use crate::error::{HunterError, Result};

/// Append `bucket:` / `url:` / `data:` lines for accounts, containers and files,
/// in that order. Existing content is kept.
pub fn write_tagged(path: &Path, result: &AggregatedResult) -> Result<()> {
    let io_err = |source| HunterError::Output { path: path.to_path_buf(), source };

    let f = OpenOptions::new().append(true).create(true).open(path).map_err(io_err)?;
    let mut w = BufWriter::new(f);
    for account in &result.accounts {
        writeln!(w, "bucket: {}", account).map_err(io_err)?;
    }
    for container in &result.containers {
        writeln!(w, "url: {}", container).map_err(io_err)?;
    }
    for file in &result.files {
        writeln!(w, "data: {}", file).map_err(io_err)?;
    }
    w.flush().map_err(io_err)?;
    Ok(())
}
