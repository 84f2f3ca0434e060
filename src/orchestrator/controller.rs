//! Run lifecycle controller.
//!
//! Prints the banner, launches nbconvert once, and maps its exit to one outcome line.

use crate::engine::{nbconvert, ProcessLauncher};
use crate::model::{FailureCause, RunOutcome, RunReport};
use crate::text_summary;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;

/// Run the notebook exactly once and report on `out`.
///
/// A launch error is folded into the failure branch; only write errors on `out` escape.
pub(crate) fn invoke<L, W>(launcher: &mut L, out: &mut W) -> Result<RunReport>
where
    L: ProcessLauncher + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", text_summary::BANNER).context("write banner")?;
    writeln!(out, "{}", text_summary::separator()).context("write separator")?;
    out.flush().context("flush output")?;

    let invocation = nbconvert::build_invocation();
    tracing::debug!("launching: {invocation}");

    let started = Instant::now();
    let outcome = match launcher.launch(&invocation) {
        Ok(status) if status.success => RunOutcome::Succeeded,
        Ok(status) => {
            tracing::info!(code = ?status.code, "nbconvert exited unsuccessfully");
            RunOutcome::Failed {
                cause: FailureCause::Exited { code: status.code },
            }
        }
        Err(e) => {
            tracing::warn!("{e}");
            RunOutcome::Failed {
                cause: FailureCause::LaunchFailed { reason: e.reason() },
            }
        }
    };
    let elapsed = started.elapsed();
    tracing::info!(
        "run finished in {}",
        humantime::format_duration(std::time::Duration::from_millis(elapsed.as_millis() as u64))
    );

    writeln!(out, "{}", text_summary::outcome_line(&outcome)).context("write outcome")?;

    Ok(RunReport {
        invocation,
        outcome,
        elapsed,
    })
}
