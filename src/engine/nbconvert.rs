//! The fixed nbconvert command line.

use crate::model::Invocation;

#[cfg(windows)]
pub const INTERPRETER: &str = "python";
#[cfg(not(windows))]
pub const INTERPRETER: &str = "python3";

pub const INPUT_DOCUMENT: &str = "DataMiningProject.ipynb";
pub const OUTPUT_DOCUMENT: &str = "DataMiningProject_executed.ipynb";
/// Where the notebook writes its charts.
pub const RESULTS_DIR: &str = "outputs/visualizations/";

/// `python3 -m jupyter nbconvert --to notebook --execute --output <out> <in>`
pub fn build_invocation() -> Invocation {
    Invocation {
        program: INTERPRETER.to_string(),
        args: [
            "-m",
            "jupyter",
            "nbconvert",
            "--to",
            "notebook",
            "--execute",
            "--output",
            OUTPUT_DOCUMENT,
            INPUT_DOCUMENT,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_is_fixed() {
        let inv = build_invocation();
        assert_eq!(inv.program, INTERPRETER);
        assert_eq!(
            inv.args,
            vec![
                "-m",
                "jupyter",
                "nbconvert",
                "--to",
                "notebook",
                "--execute",
                "--output",
                "DataMiningProject_executed.ipynb",
                "DataMiningProject.ipynb",
            ]
        );
        assert_eq!(inv, build_invocation());
    }

    #[test]
    fn input_document_is_last() {
        let inv = build_invocation();
        assert_eq!(inv.args.last().map(String::as_str), Some(INPUT_DOCUMENT));
    }
}
