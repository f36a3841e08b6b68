//! Lives-saved estimates for personal carbon-emission reductions.
//!
//! This crate holds the computational core of the CO2e impact calculator. It
//! is free of I/O and global state so that callers in any threading model can
//! use it, and so that alternative catalogs or coefficients can be supplied
//! for sensitivity analysis.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A validated, read-only [`Catalog`] of lifestyle changes, with the ten
//!   built-in changes available through [`Catalog::standard`]
//! - A [`Selection`] of catalog identifiers
//! - Exact decimal impact arithmetic in [`ImpactEngine`] using the Bressler
//!   (2021) Mortality Cost of Carbon
//! - Plain-language banding of a central estimate via [`interpret`]
//!
//! # Example
//!
//! ```
//! use impact_engine::{Catalog, ImpactEngine, Interpretation, Selection, interpret};
//! use rust_decimal_macros::dec;
//!
//! let catalog = Catalog::standard();
//! let engine = ImpactEngine::default();
//! let selection = Selection::from_ids(["flight_syd_lon", "reduce_meat", "go_car_free"]);
//!
//! let result = engine.compute_selection(&catalog, &selection).expect("valid selection");
//!
//! assert_eq!(result.total_annual_kg, 7820);
//! assert_eq!(result.co2e_tons, dec!(78.2));
//! assert_eq!(result.lives_central, dec!(0.0176732));
//! assert!(matches!(
//!     interpret(result.lives_central),
//!     Interpretation::ShareOfOneLife { decimals: 2, .. }
//! ));
//! ```

mod catalog;
mod engine;
mod error;
mod interpretation;
mod parameters;
mod selection;
mod standard_catalog;

pub use catalog::{Catalog, LifestyleChange};
pub use engine::{ImpactEngine, ImpactResult, SelectionSummary};
pub use error::{CatalogError, ImpactError, ParameterError};
pub use interpretation::{Interpretation, interpret};
pub use parameters::{
    ImpactParameters, KG_PER_METRIC_TON, MCC_CENTRAL, MCC_HIGH, MCC_LOW, MortalityCoefficients,
    PROJECTION_YEARS,
};
pub use selection::Selection;
