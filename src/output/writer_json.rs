use std::path::Path;

use serde::Serialize;

use crate::aggregator::AggregatedResult;
use crate::probe::StatsSnapshot;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub base: &'a str,
    pub elapsed_ms: u64,
    pub stats: StatsSnapshot,
    #[serde(flatten)]
    pub results: &'a AggregatedResult,
}

pub fn write_json(path: &Path, report: &JsonReport<'_>) -> anyhow::Result<()> {
    let data = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, data)?;
    Ok(())
}
