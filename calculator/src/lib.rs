//! Terminal front end for the CO2e impact calculator.
//!
//! This crate is a thin presentation layer over [`impact_engine`]. It parses
//! command-line flags, loads layered settings, keeps a tick-box view of the
//! catalog, and renders the impact report and methodology pages. All totals
//! and estimates come from the engine.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod methodology;
pub mod report;
pub mod view;

pub use app::{OutputFormat, run};
pub use cli::{Action, Choice, CliArgs};
pub use config::CalculatorSettings;
pub use error::CalculatorError;
pub use report::ImpactReport;
pub use view::ChecklistView;
