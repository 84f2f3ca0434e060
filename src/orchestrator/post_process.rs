//! Post-run processing utilities.
//!
//! Builds the run record, then handles auto-save and JSON output after a run completes.

use crate::engine::nbconvert;
use crate::model::{RunRecord, RunReport};
use std::path::PathBuf;

/// Result of post-run processing, ready for presentation layers.
pub(crate) struct ProcessedRun {
    pub record: RunRecord,
    pub messages: Vec<String>,
}

pub(crate) fn build_record(report: &RunReport) -> RunRecord {
    RunRecord {
        timestamp_utc: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        command: report.invocation.argv(),
        input_document: nbconvert::INPUT_DOCUMENT.to_string(),
        output_document: nbconvert::OUTPUT_DOCUMENT.to_string(),
        results_dir: nbconvert::RESULTS_DIR.to_string(),
        exit_code: report.outcome.exit_code(),
        outcome: report.outcome.clone(),
        elapsed: report.elapsed,
        tool_version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

/// Record the run and, when asked, save it. Save failures become messages, never errors.
pub(crate) fn process_run<F>(report: &RunReport, auto_save: bool, save: F) -> ProcessedRun
where
    F: FnOnce(&RunRecord) -> anyhow::Result<PathBuf>,
{
    let record = build_record(report);
    let mut messages = Vec::new();

    if auto_save {
        match save(&record) {
            Ok(p) => messages.push(format!("Saved: {}", p.display())),
            Err(e) => {
                tracing::warn!("auto-save failed: {e:#}");
                messages.push(format!("Save failed: {e:#}"));
            }
        }
    }

    ProcessedRun { record, messages }
}
