//! Text lines for CLI output.
//!
//! Every user-facing message the invoker prints is built here so tests can match on them.

use crate::engine::nbconvert::{INPUT_DOCUMENT, RESULTS_DIR};
use crate::model::{RunOutcome, RunRecord};

pub(crate) const BANNER: &str = "Starting Network Word Frequency Analysis...";
const SEPARATOR_WIDTH: usize = 50;

pub(crate) fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub(crate) fn success_line() -> String {
    format!("✓ Analysis complete! Check {RESULTS_DIR} for results")
}

pub(crate) fn failure_line() -> String {
    format!("✗ Error running analysis. Please check {INPUT_DOCUMENT}")
}

pub(crate) fn outcome_line(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Succeeded => success_line(),
        RunOutcome::Failed { .. } => failure_line(),
    }
}

/// Lines for `--history`, newest first.
pub(crate) fn history_lines(records: &[RunRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No saved runs.".to_string()];
    }
    records.iter().map(RunRecord::to_summary_line).collect()
}
