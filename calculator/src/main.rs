//! `co2e-impact` entry point.
//!
//! Parsing, calculation, and rendering live in the `calculator` library so
//! they can be tested without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use calculator::{CalculatorError, CalculatorSettings, CliArgs, OutputFormat, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let args = match CliArgs::parse_from_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            if let Err(print_err) = err.print() {
                drop(print_err);
            }
            return if err.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            if err.is_usage_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn execute(args: &CliArgs) -> Result<(), CalculatorError> {
    let settings = CalculatorSettings::load_layered()?;
    init_tracing(settings.log_json);

    let format = if args.wants_json(settings.json) {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    run(args, format, &mut io::stdout().lock())
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
