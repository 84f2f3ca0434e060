mod cli;
mod engine;
mod error;
mod logging;
mod model;
mod orchestrator;
mod storage;
mod text_summary;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose);

    let outcome = cli::run(args)?;
    // A failed analysis must be visible to the calling shell.
    let code = cli::exit_code(outcome.as_ref());
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
