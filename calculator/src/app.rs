//! Runs one invocation of the calculator against an output sink.
//!
//! The binary delegates here so the whole flow can be exercised in tests
//! with an in-memory writer.

use std::io::Write;

use impact_engine::{Catalog, ImpactEngine};

use crate::cli::{Action, CliArgs};
use crate::error::CalculatorError;
use crate::methodology::Methodology;
use crate::view::ChecklistView;

/// Output format for the impact report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Executes the action described by `args`, writing results to `out`.
///
/// # Errors
///
/// Returns [`CalculatorError::UnknownChange`] for identifiers outside the
/// catalog, [`CalculatorError::NoSelection`] when nothing was selected, and
/// output or serialization failures.
///
/// # Example
///
/// ```
/// use calculator::app::{OutputFormat, run};
/// use calculator::cli::CliArgs;
///
/// let args = CliArgs::parse_from_args(["co2e-impact", "-s", "energy_efficiency"]).expect("parse");
/// let mut out = Vec::new();
///
/// run(&args, OutputFormat::Text, &mut out).expect("run");
///
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.contains("If 1,475 people made these same commitments"));
/// ```
pub fn run(
    args: &CliArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CalculatorError> {
    let engine = ImpactEngine::default();
    let mut view = ChecklistView::new(Catalog::standard(), engine);
    match args.action() {
        Action::Methodology => {
            writeln!(out, "{}", Methodology::new(*engine.parameters()))?;
        }
        Action::List(choice) => {
            view.apply(&choice)?;
            writeln!(out, "{}", view.cards()?)?;
        }
        Action::Calculate(choice) => {
            view.apply(&choice)?;
            let report = view.calculate()?;
            match format {
                OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
                OutputFormat::Text => {
                    writeln!(out, "{}", view.summary_line()?)?;
                    writeln!(out)?;
                    writeln!(out, "{report}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn run_text(args: &[&str], format: OutputFormat) -> Result<String, CalculatorError> {
        let argv = std::iter::once("co2e-impact").chain(args.iter().copied());
        let parsed = CliArgs::parse_from_args(argv).expect("arguments should parse");
        let mut out = Vec::new();
        run(&parsed, format, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[rstest]
    fn text_report_starts_with_summary() {
        let text = run_text(&["--all"], OutputFormat::Text).expect("run");

        assert!(text.starts_with(
            "Selected: 10 changes | Annual savings: 13,340 kg CO2e | 10-year total: 133,400 kg CO2e"
        ));
        assert!(text.contains("Your Climate Impact Over 10 Years"));
        assert!(text.contains("  0.0301\n"));
    }

    #[rstest]
    fn json_report_is_machine_readable() {
        let text = run_text(&["-s", "flight_syd_lon"], OutputFormat::Json).expect("run");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(value["impact"]["co2eTons"], "45");
    }

    #[rstest]
    fn empty_selection_writes_nothing() {
        let parsed = CliArgs::parse_from_args(["co2e-impact"]).expect("parse");
        let mut out = Vec::new();

        let result = run(&parsed, OutputFormat::Text, &mut out);

        assert!(matches!(result, Err(CalculatorError::NoSelection)));
        assert!(out.is_empty());
    }

    #[rstest]
    fn unknown_identifier_is_a_usage_error() {
        let err = run_text(&["-s", "fly_more"], OutputFormat::Text).expect_err("unknown id");

        assert!(err.is_usage_error());
    }

    #[rstest]
    #[case(&["--list"], "Step 1: Choose Life Changes")]
    #[case(&["--methodology"], "Methodology & Scientific Sources")]
    fn informational_pages(#[case] args: &[&str], #[case] heading: &str) {
        let text = run_text(args, OutputFormat::Text).expect("run");

        assert!(text.starts_with(heading));
    }
}
