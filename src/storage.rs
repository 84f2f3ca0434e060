//! Run history on disk.
//!
//! Each run is one pretty-printed JSON file under the platform data directory.

use crate::model::RunRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// `<data dir>/run-analysis/runs`
pub fn base_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("could not determine the user data directory")?;
    Ok(data.join("run-analysis").join("runs"))
}

fn file_name_for(record: &RunRecord) -> String {
    let stamp = if record.timestamp_utc.is_empty() {
        "unknown".to_string()
    } else {
        record.timestamp_utc.replace(':', "-")
    };
    format!("run-{stamp}.json")
}

pub fn save_run(record: &RunRecord) -> Result<PathBuf> {
    save_run_in(&base_dir()?, record)
}

pub fn save_run_in(dir: &Path, record: &RunRecord) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(file_name_for(record));
    let data = serde_json::to_vec_pretty(record).context("serialize run record")?;
    std::fs::write(&path, data).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

pub fn load_recent(limit: usize) -> Result<Vec<RunRecord>> {
    load_recent_in(&base_dir()?, limit)
}

/// Newest first by record timestamp. Files that fail to parse are skipped.
pub fn load_recent_in(dir: &Path, limit: usize) -> Result<Vec<RunRecord>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    let mut out: Vec<(Option<OffsetDateTime>, RunRecord)> = Vec::new();
    for path in paths {
        let parsed = std::fs::read(&path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| serde_json::from_slice::<RunRecord>(&bytes).map_err(Into::into));
        match parsed {
            Ok(record) => {
                // Fraction digits vary in width, so file names do not sort by time.
                let at = OffsetDateTime::parse(&record.timestamp_utc, &Rfc3339).ok();
                out.push((at, record));
            }
            Err(e) => tracing::warn!("skipping {}: {e:#}", path.display()),
        }
    }
    // Records without a parseable timestamp go last.
    out.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(out.into_iter().take(limit).map(|(_, r)| r).collect())
}
