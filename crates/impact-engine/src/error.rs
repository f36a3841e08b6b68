//! Error types for the impact-engine crate.
//!
//! This module defines semantic error enums for catalog construction and
//! lookup, impact parameter validation, and impact computation, following the
//! project's error handling conventions with `thiserror`.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when building or querying a lifestyle-change catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog was constructed without any entries.
    #[error("catalog contains no lifestyle changes")]
    EmptyCatalog,

    /// An entry has an empty identifier.
    #[error("lifestyle change at index {index} has an empty identifier")]
    EmptyIdentifier {
        /// Index of the offending entry.
        index: usize,
    },

    /// Two entries share the same identifier.
    #[error("duplicate lifestyle change identifier '{id}'")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: String,
    },

    /// The requested identifier does not exist in the catalog.
    #[error("lifestyle change '{id}' not found in catalog")]
    UnknownIdentifier {
        /// The identifier that was not found.
        id: String,
    },
}

/// Errors that can occur when constructing custom impact parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The projection horizon must cover at least one year.
    #[error("projection period must be at least one year")]
    ZeroProjectionYears,

    /// The kilogram-to-ton divisor must be strictly positive.
    #[error("kilograms per metric ton must be positive, found {value}")]
    NonPositiveTonDivisor {
        /// The rejected divisor.
        value: Decimal,
    },
}

/// Errors that can occur while computing an impact result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImpactError {
    /// No lifestyle changes were selected.
    #[error("no lifestyle changes selected; select at least one change to calculate impact")]
    EmptySelection,

    /// An intermediate total exceeded the numeric range.
    #[error("arithmetic overflow while computing {stage}")]
    ArithmeticOverflow {
        /// Computation stage that overflowed.
        stage: &'static str,
    },

    /// A selected identifier could not be resolved against the catalog.
    #[error("catalog error: {source}")]
    Catalog {
        /// Underlying catalog error.
        #[from]
        #[source]
        source: CatalogError,
    },
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn catalog_error_empty_formats_correctly() {
        assert_eq!(
            CatalogError::EmptyCatalog.to_string(),
            "catalog contains no lifestyle changes"
        );
    }

    #[test]
    fn catalog_error_empty_identifier_formats_correctly() {
        let err = CatalogError::EmptyIdentifier { index: 3 };
        assert_eq!(
            err.to_string(),
            "lifestyle change at index 3 has an empty identifier"
        );
    }

    #[test]
    fn catalog_error_duplicate_formats_correctly() {
        let err = CatalogError::DuplicateIdentifier {
            id: "reduce_meat".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate lifestyle change identifier 'reduce_meat'"
        );
    }

    #[test]
    fn catalog_error_unknown_formats_correctly() {
        let err = CatalogError::UnknownIdentifier {
            id: "teleport".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "lifestyle change 'teleport' not found in catalog"
        );
    }

    #[test]
    fn parameter_error_divisor_formats_correctly() {
        let err = ParameterError::NonPositiveTonDivisor { value: dec!(-5) };
        assert_eq!(
            err.to_string(),
            "kilograms per metric ton must be positive, found -5"
        );
    }

    #[test]
    fn impact_error_empty_selection_formats_correctly() {
        assert_eq!(
            ImpactError::EmptySelection.to_string(),
            "no lifestyle changes selected; select at least one change to calculate impact"
        );
    }

    #[test]
    fn impact_error_wraps_catalog_error() {
        let err = ImpactError::from(CatalogError::UnknownIdentifier {
            id: "teleport".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "catalog error: lifestyle change 'teleport' not found in catalog"
        );
    }
}
