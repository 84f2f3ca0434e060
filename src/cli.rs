use crate::engine::{ProcessLauncher, SystemLauncher};
use crate::model::RunOutcome;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "run-analysis",
    version,
    about = "Run the network word frequency analysis notebook through Jupyter nbconvert"
)]
pub struct Cli {
    /// Print the run record as JSON on stdout (progress lines move to stderr)
    #[arg(long)]
    pub json: bool,

    /// Save the run record to the local run history
    #[arg(long)]
    pub auto_save: bool,

    /// List the N most recent saved runs and exit without running anything
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub history: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Dispatch on the parsed arguments. Returns the outcome of the run, if one happened.
pub fn run(args: Cli) -> Result<Option<RunOutcome>> {
    if let Some(n) = args.history {
        show_history(usize::try_from(n).unwrap_or(usize::MAX))?;
        return Ok(None);
    }

    let mut launcher = if args.json {
        SystemLauncher::for_json()
    } else {
        SystemLauncher::default()
    };
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_notebook(
        &args,
        &mut launcher,
        &mut stdout.lock(),
        &mut stderr.lock(),
        crate::storage::save_run,
    )
    .map(Some)
}

/// Exit code for this process: 1 only when a run happened and failed.
pub fn exit_code(outcome: Option<&RunOutcome>) -> i32 {
    outcome.map_or(0, RunOutcome::process_exit_code)
}

fn show_history(limit: usize) -> Result<()> {
    let records = crate::storage::load_recent(limit).context("failed to load run history")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in crate::text_summary::history_lines(&records) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_notebook<L, O, E, F>(
    args: &Cli,
    launcher: &mut L,
    out: &mut O,
    err: &mut E,
    save: F,
) -> Result<RunOutcome>
where
    L: ProcessLauncher,
    O: Write,
    E: Write,
    F: FnOnce(&crate::model::RunRecord) -> Result<std::path::PathBuf>,
{
    // In JSON mode stdout carries only the record.
    let report = if args.json {
        crate::orchestrator::invoke(&mut *launcher, &mut *err)?
    } else {
        crate::orchestrator::invoke(&mut *launcher, &mut *out)?
    };

    let processed = crate::orchestrator::process_run(&report, args.auto_save, save);
    for msg in &processed.messages {
        writeln!(err, "{msg}")?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&processed.record)?;
        writeln!(out, "{json}")?;
    }

    Ok(report.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedLauncher;

    fn run_with(
        argv: &[&str],
        mut launcher: ScriptedLauncher,
    ) -> (RunOutcome, String, String, ScriptedLauncher) {
        let args = Cli::try_parse_from(argv.iter().copied()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = run_notebook(&args, &mut launcher, &mut out, &mut err, |_| {
            panic!("history must not be written")
        })
        .unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            launcher,
        )
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let args = Cli::try_parse_from(["run-analysis"]).unwrap();
        assert!(!args.json);
        assert!(!args.auto_save);
        assert!(args.history.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_flags() {
        let args =
            Cli::try_parse_from(["run-analysis", "--json", "--auto-save", "-vv"]).unwrap();
        assert!(args.json);
        assert!(args.auto_save);
        assert_eq!(args.verbose, 2);

        let args = Cli::try_parse_from(["run-analysis", "--history", "5"]).unwrap();
        assert_eq!(args.history, Some(5));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["run-analysis", "other.ipynb"]).is_err());
    }

    #[test]
    fn rejects_zero_history() {
        assert!(Cli::try_parse_from(["run-analysis", "--history", "0"]).is_err());
    }

    #[test]
    fn text_mode_prints_three_lines_on_stdout() {
        let (outcome, out, err, launcher) =
            run_with(&["run-analysis"], ScriptedLauncher::exiting(0));
        assert_eq!(launcher.calls.len(), 1);
        assert!(outcome.is_success());
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().last().unwrap().contains("outputs/visualizations/"));
        assert!(err.is_empty());
        assert_eq!(exit_code(Some(&outcome)), 0);
    }

    #[test]
    fn json_mode_keeps_stdout_for_the_record() {
        let (outcome, out, err, launcher) =
            run_with(&["run-analysis", "--json"], ScriptedLauncher::exiting(1));
        assert_eq!(launcher.calls.len(), 1);

        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Starting Network Word Frequency Analysis...");
        assert!(lines[2].contains("DataMiningProject.ipynb"));

        let record: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(record["outcome"]["status"], "failed");
        assert_eq!(record["exit_code"], 1);
        assert_eq!(record["input_document"], "DataMiningProject.ipynb");

        assert_eq!(exit_code(Some(&outcome)), 1);
    }

    #[test]
    fn missing_interpreter_exits_with_one() {
        let (outcome, out, _, _) = run_with(&["run-analysis"], ScriptedLauncher::missing());
        assert!(out.lines().last().unwrap().contains("Error running analysis"));
        assert_eq!(exit_code(Some(&outcome)), 1);
    }

    #[test]
    fn history_listing_exits_with_zero() {
        assert_eq!(exit_code(None), 0);
    }
}
