//! Error types for the calculator front end.

use std::io;

use impact_engine::ImpactError;
use thiserror::Error;

/// Errors surfaced while parsing input, calculating, or writing output.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// No lifestyle change was selected before calculating.
    #[error("No Selection: Please select at least one lifestyle change to calculate impact.")]
    NoSelection,
    /// An identifier on the command line does not name a catalog entry.
    #[error("unknown lifestyle change '{id}'; run with --list to see the available identifiers")]
    UnknownChange {
        /// Identifier that was not recognised.
        id: String,
    },
    /// Layered settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration failure.
        message: String,
    },
    /// The impact engine rejected the calculation.
    #[error("impact calculation failed: {source}")]
    Impact {
        /// Underlying engine error.
        #[from]
        #[source]
        source: ImpactError,
    },
    /// The JSON report could not be produced.
    #[error("failed to serialize report: {source}")]
    Serialize {
        /// Underlying serializer error.
        #[from]
        #[source]
        source: serde_json::Error,
    },
    /// Output could not be written.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        #[source]
        source: io::Error,
    },
}

impl CalculatorError {
    /// Returns `true` when the error stems from invalid user input rather
    /// than a runtime failure.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::NoSelection | Self::UnknownChange { .. })
    }
}
