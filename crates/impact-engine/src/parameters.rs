//! Scientific constants and the parameter set carried by the engine.
//!
//! The Mortality Cost of Carbon figures come from Bressler, R.D. (2021),
//! "The mortality cost of carbon", Nature Communications 12, 4467
//! (<https://doi.org/10.1038/s41467-021-24487-w>). They count excess
//! temperature-related deaths between 2020 and 2100 per metric ton of CO2e.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::ParameterError;

/// Central MCC estimate in deaths per metric ton CO2e.
pub const MCC_CENTRAL: Decimal = dec!(0.000226);

/// Lower MCC bound in deaths per metric ton CO2e. Negative by publication.
pub const MCC_LOW: Decimal = dec!(-0.000171);

/// Upper MCC bound in deaths per metric ton CO2e.
pub const MCC_HIGH: Decimal = dec!(0.000678);

/// Kilograms in one metric ton.
pub const KG_PER_METRIC_TON: Decimal = dec!(1000);

/// Commitment period in years.
pub const PROJECTION_YEARS: u32 = 10;

/// Low, central, and high mortality coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortalityCoefficients {
    /// Lower bound, may be negative.
    pub low: Decimal,
    /// Central estimate.
    pub central: Decimal,
    /// Upper bound.
    pub high: Decimal,
}

impl MortalityCoefficients {
    /// Coefficients published by Bressler (2021).
    pub const BRESSLER_2021: Self = Self {
        low: MCC_LOW,
        central: MCC_CENTRAL,
        high: MCC_HIGH,
    };
}

/// Read-only parameter set used by [`crate::ImpactEngine`].
///
/// # Example
///
/// ```
/// use impact_engine::{ImpactParameters, MortalityCoefficients};
/// use rust_decimal_macros::dec;
///
/// let doubled = MortalityCoefficients {
///     low: dec!(-0.000342),
///     central: dec!(0.000452),
///     high: dec!(0.001356),
/// };
/// let params = ImpactParameters::new(doubled, 5, dec!(1000)).expect("valid parameters");
///
/// assert_eq!(params.projection_years(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactParameters {
    coefficients: MortalityCoefficients,
    projection_years: u32,
    kg_per_metric_ton: Decimal,
}

impl ImpactParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `projection_years` is zero or
    /// `kg_per_metric_ton` is not strictly positive.
    pub fn new(
        coefficients: MortalityCoefficients,
        projection_years: u32,
        kg_per_metric_ton: Decimal,
    ) -> Result<Self, ParameterError> {
        if projection_years == 0 {
            return Err(ParameterError::ZeroProjectionYears);
        }
        if kg_per_metric_ton <= Decimal::ZERO {
            return Err(ParameterError::NonPositiveTonDivisor {
                value: kg_per_metric_ton,
            });
        }
        Ok(Self {
            coefficients,
            projection_years,
            kg_per_metric_ton,
        })
    }

    /// The published Bressler (2021) parameters over a ten-year commitment.
    #[must_use]
    pub const fn bressler_2021() -> Self {
        Self {
            coefficients: MortalityCoefficients::BRESSLER_2021,
            projection_years: PROJECTION_YEARS,
            kg_per_metric_ton: KG_PER_METRIC_TON,
        }
    }

    /// Returns the mortality coefficients.
    #[must_use]
    pub const fn coefficients(&self) -> MortalityCoefficients {
        self.coefficients
    }

    /// Returns the commitment period in years.
    #[must_use]
    pub const fn projection_years(&self) -> u32 {
        self.projection_years
    }

    /// Returns the kilogram-to-ton divisor.
    #[must_use]
    pub const fn kg_per_metric_ton(&self) -> Decimal {
        self.kg_per_metric_ton
    }
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self::bressler_2021()
    }
}
