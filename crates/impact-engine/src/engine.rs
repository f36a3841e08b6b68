//! Exact lives-saved arithmetic over a set of lifestyle changes.
//!
//! The engine is a pure function of its inputs and its immutable
//! [`ImpactParameters`]: it performs no I/O and keeps no state between calls.
//! Totals are summed as integers, converted to metric tons with exact decimal
//! division, and scaled by each mortality coefficient without rounding.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Catalog, LifestyleChange};
use crate::error::ImpactError;
use crate::parameters::ImpactParameters;
use crate::selection::Selection;

/// Outcome of one impact calculation.
///
/// Signs are preserved: `lives_low` is negative whenever `co2e_tons` is
/// positive because the published lower bound is negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// Number of distinct lifestyle changes counted.
    pub selected_count: usize,
    /// Commitment period used for the projection.
    pub projection_years: u32,
    /// Sum of annual savings in kilograms of CO2e.
    pub total_annual_kg: u64,
    /// Annual savings multiplied by the projection period.
    pub total_period_kg: u64,
    /// Annual savings in metric tons of CO2e.
    pub annual_co2e_tons: Decimal,
    /// Period savings in metric tons of CO2e.
    pub co2e_tons: Decimal,
    /// Central lives-saved estimate.
    pub lives_central: Decimal,
    /// Lower-bound lives-saved estimate, possibly negative.
    pub lives_low: Decimal,
    /// Upper-bound lives-saved estimate.
    pub lives_high: Decimal,
}

/// Running totals for a selection, computed without rejecting empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Number of selected lifestyle changes.
    pub count: usize,
    /// Sum of annual savings in kilograms.
    pub total_annual_kg: u64,
    /// Annual savings multiplied by the projection period.
    pub total_period_kg: u64,
}

/// Computes [`ImpactResult`] values from selected lifestyle changes.
///
/// # Example
///
/// ```
/// use impact_engine::{Catalog, ImpactEngine, Selection};
/// use rust_decimal_macros::dec;
///
/// let catalog = Catalog::standard();
/// let engine = ImpactEngine::default();
/// let selection = Selection::from_ids(["flight_syd_lon"]);
///
/// let result = engine.compute_selection(&catalog, &selection).expect("valid selection");
///
/// assert_eq!(result.co2e_tons, dec!(45));
/// assert_eq!(result.lives_central, dec!(0.01017));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactEngine {
    parameters: ImpactParameters,
}

impl ImpactEngine {
    /// Creates an engine bound to the given parameters.
    #[must_use]
    pub const fn new(parameters: ImpactParameters) -> Self {
        Self { parameters }
    }

    /// Returns the parameters this engine applies.
    #[must_use]
    pub const fn parameters(&self) -> &ImpactParameters {
        &self.parameters
    }

    /// Computes the impact of a non-empty set of lifestyle changes.
    ///
    /// Records sharing an identifier are counted once.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::EmptySelection`] if `selected` yields nothing,
    /// or [`ImpactError::ArithmeticOverflow`] if a total leaves the numeric
    /// range.
    pub fn compute<'a, I>(&self, selected: I) -> Result<ImpactResult, ImpactError>
    where
        I: IntoIterator<Item = &'a LifestyleChange>,
    {
        let (selected_count, total_annual_kg) = distinct_annual_total(selected)?;
        if selected_count == 0 {
            return Err(ImpactError::EmptySelection);
        }

        let total_period_kg = self.period_kg(total_annual_kg)?;
        let annual_co2e_tons = self.metric_tons(total_annual_kg, "annual metric tons")?;
        let co2e_tons = self.metric_tons(total_period_kg, "metric tons")?;

        let coefficients = self.parameters.coefficients();
        Ok(ImpactResult {
            selected_count,
            projection_years: self.parameters.projection_years(),
            total_annual_kg,
            total_period_kg,
            annual_co2e_tons,
            co2e_tons,
            lives_central: scale(co2e_tons, coefficients.central)?,
            lives_low: scale(co2e_tons, coefficients.low)?,
            lives_high: scale(co2e_tons, coefficients.high)?,
        })
    }

    /// Resolves a selection against a catalog and computes its impact.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::EmptySelection`] for an empty selection and
    /// [`ImpactError::Catalog`] for identifiers missing from the catalog.
    pub fn compute_selection(
        &self,
        catalog: &Catalog,
        selection: &Selection,
    ) -> Result<ImpactResult, ImpactError> {
        let resolved = selection.resolve(catalog)?;
        self.compute(resolved)
    }

    /// Returns running totals for a selection, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::Catalog`] for identifiers missing from the
    /// catalog.
    pub fn summarize(
        &self,
        catalog: &Catalog,
        selection: &Selection,
    ) -> Result<SelectionSummary, ImpactError> {
        let resolved = selection.resolve_allowing_empty(catalog)?;
        let (count, total_annual_kg) = distinct_annual_total(resolved)?;
        Ok(SelectionSummary {
            count,
            total_annual_kg,
            total_period_kg: self.period_kg(total_annual_kg)?,
        })
    }

    /// Multiplies an annual figure by the projection period.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::ArithmeticOverflow`] if the product does not
    /// fit in a `u64`.
    pub fn period_kg(&self, annual_kg: u64) -> Result<u64, ImpactError> {
        annual_kg
            .checked_mul(u64::from(self.parameters.projection_years()))
            .ok_or(ImpactError::ArithmeticOverflow {
                stage: "period total",
            })
    }

    fn metric_tons(&self, kg: u64, stage: &'static str) -> Result<Decimal, ImpactError> {
        Decimal::from(kg)
            .checked_div(self.parameters.kg_per_metric_ton())
            .map(|tons| tons.normalize())
            .ok_or(ImpactError::ArithmeticOverflow { stage })
    }
}

fn distinct_annual_total<'a, I>(selected: I) -> Result<(usize, u64), ImpactError>
where
    I: IntoIterator<Item = &'a LifestyleChange>,
{
    let mut seen = BTreeSet::new();
    let mut total: u64 = 0;
    for change in selected {
        if !seen.insert(change.id()) {
            continue;
        }
        total = total
            .checked_add(u64::from(change.annual_kg()))
            .ok_or(ImpactError::ArithmeticOverflow {
                stage: "annual total",
            })?;
    }
    Ok((seen.len(), total))
}

fn scale(co2e_tons: Decimal, coefficient: Decimal) -> Result<Decimal, ImpactError> {
    co2e_tons
        .checked_mul(coefficient)
        .map(|lives| lives.normalize())
        .ok_or(ImpactError::ArithmeticOverflow {
            stage: "lives saved",
        })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::CatalogError;
    use crate::parameters::MortalityCoefficients;

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::standard()
    }

    fn compute_ids(catalog: &Catalog, ids: &[&str]) -> Result<ImpactResult, ImpactError> {
        let selection = Selection::from_ids(ids.iter().copied());
        ImpactEngine::default().compute_selection(catalog, &selection)
    }

    #[rstest]
    fn single_long_haul_flight(catalog: Catalog) {
        let result = compute_ids(&catalog, &["flight_syd_lon"]).expect("valid selection");

        assert_eq!(result.total_annual_kg, 4500);
        assert_eq!(result.total_period_kg, 45_000);
        assert_eq!(result.co2e_tons, dec!(45));
        assert_eq!(result.lives_central, dec!(0.01017));
        assert_eq!(result.lives_low, dec!(-0.007695));
        assert_eq!(result.lives_high, dec!(0.03051));
    }

    #[rstest]
    fn flight_meat_and_car(catalog: Catalog) {
        let result = compute_ids(&catalog, &["flight_syd_lon", "reduce_meat", "go_car_free"])
            .expect("valid selection");

        assert_eq!(result.total_annual_kg, 7820);
        assert_eq!(result.total_period_kg, 78_200);
        assert_eq!(result.co2e_tons, dec!(78.2));
        assert_eq!(result.lives_central, dec!(0.0176732));
    }

    #[rstest]
    fn every_catalog_entry(catalog: Catalog) {
        let result = ImpactEngine::default()
            .compute(catalog.list_all())
            .expect("valid selection");

        assert_eq!(result.selected_count, 10);
        assert_eq!(result.total_annual_kg, 13_340);
        assert_eq!(result.total_period_kg, 133_400);
        assert_eq!(result.co2e_tons, dec!(133.4));
        assert_eq!(result.lives_central, dec!(0.0301484));
    }

    #[rstest]
    fn smallest_single_change(catalog: Catalog) {
        let result = compute_ids(&catalog, &["energy_efficiency"]).expect("valid selection");

        assert_eq!(result.co2e_tons, dec!(3.0));
        assert_eq!(result.lives_central, dec!(0.000678));
    }

    #[test]
    fn empty_input_is_rejected() {
        let nothing: [&LifestyleChange; 0] = [];

        assert_eq!(
            ImpactEngine::default().compute(nothing),
            Err(ImpactError::EmptySelection)
        );
    }

    #[rstest]
    fn unknown_identifier_is_reported(catalog: Catalog) {
        assert_eq!(
            compute_ids(&catalog, &["teleport"]),
            Err(ImpactError::Catalog {
                source: CatalogError::UnknownIdentifier {
                    id: "teleport".to_owned()
                }
            })
        );
    }

    #[rstest]
    fn order_does_not_change_totals(catalog: Catalog) {
        let engine = ImpactEngine::default();
        let forward: Vec<&LifestyleChange> = catalog.list_all().iter().collect();
        let reversed: Vec<&LifestyleChange> = catalog.list_all().iter().rev().collect();

        assert_eq!(engine.compute(forward), engine.compute(reversed));
    }

    #[rstest]
    fn repeated_records_count_once(catalog: Catalog) {
        let flight = catalog.find("flight_syd_lon").expect("known id");
        let result = ImpactEngine::default()
            .compute([flight, flight])
            .expect("valid selection");

        assert_eq!(result.selected_count, 1);
        assert_eq!(result.total_annual_kg, 4500);
    }

    #[rstest]
    fn repeated_calls_are_identical(catalog: Catalog) {
        let first = compute_ids(&catalog, &["switch_ev", "short_flight"]);
        let second = compute_ids(&catalog, &["switch_ev", "short_flight"]);

        assert_eq!(first, second);
    }

    #[rstest]
    #[case(&["flight_syd_lon"])]
    #[case(&["reduce_food_waste"])]
    #[case(&["cycle_commute", "eliminate_dairy"])]
    fn low_estimate_is_negative_for_positive_savings(catalog: Catalog, #[case] ids: &[&str]) {
        let result = compute_ids(&catalog, ids).expect("valid selection");

        assert!(result.co2e_tons > Decimal::ZERO);
        assert!(result.lives_low < Decimal::ZERO);
        assert!(result.lives_central < result.lives_high);
    }

    #[test]
    fn zero_weight_change_yields_zero_lives() {
        let idle = LifestyleChange::new("idle", "Idle", 0, "", "");
        let result = ImpactEngine::default()
            .compute([&idle])
            .expect("valid selection");

        assert_eq!(result.co2e_tons, Decimal::ZERO);
        assert_eq!(result.lives_central, Decimal::ZERO);
        assert_eq!(result.lives_low, Decimal::ZERO);
    }

    #[test]
    fn custom_parameters_scale_linearly() {
        let params = ImpactParameters::new(MortalityCoefficients::BRESSLER_2021, 20, dec!(1000))
            .expect("valid parameters");
        let flight = LifestyleChange::new("f", "Flight", 4500, "", "");
        let result = ImpactEngine::new(params)
            .compute([&flight])
            .expect("valid selection");

        assert_eq!(result.projection_years, 20);
        assert_eq!(result.co2e_tons, dec!(90));
        assert_eq!(result.lives_central, dec!(0.02034));
    }

    #[test]
    fn overflowing_period_is_reported() {
        let engine = ImpactEngine::default();

        assert_eq!(
            engine.period_kg(u64::MAX),
            Err(ImpactError::ArithmeticOverflow {
                stage: "period total"
            })
        );
    }

    #[rstest]
    fn summary_accepts_empty_selection(catalog: Catalog) {
        let summary = ImpactEngine::default()
            .summarize(&catalog, &Selection::new())
            .expect("summary");

        assert_eq!(summary, SelectionSummary::default());
    }

    #[rstest]
    fn summary_tracks_selection(catalog: Catalog) {
        let summary = ImpactEngine::default()
            .summarize(&catalog, &Selection::from_ids(["reduce_meat", "eliminate_dairy"]))
            .expect("summary");

        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_annual_kg, 1340);
        assert_eq!(summary.total_period_kg, 13_400);
    }

    #[rstest]
    fn annual_tons_use_the_same_divisor(catalog: Catalog) {
        let result = compute_ids(&catalog, &["reduce_meat"]).expect("valid selection");

        assert_eq!(result.annual_co2e_tons, dec!(0.92));
        assert_eq!(result.co2e_tons, dec!(9.2));
    }

    #[test]
    fn annual_tons_follow_custom_divisor() {
        let params = ImpactParameters::new(MortalityCoefficients::BRESSLER_2021, 10, dec!(2000))
            .expect("valid parameters");
        let bike = LifestyleChange::new("bike", "Bike", 1500, "", "");
        let result = ImpactEngine::new(params)
            .compute([&bike])
            .expect("valid selection");

        assert_eq!(result.annual_co2e_tons, dec!(0.75));
        assert_eq!(result.co2e_tons, dec!(7.5));
    }

    #[rstest]
    fn result_serializes_decimals_as_strings(catalog: Catalog) {
        let result = compute_ids(&catalog, &["flight_syd_lon"]).expect("valid selection");
        let json = serde_json::to_value(&result).expect("serialize");

        assert_eq!(json["livesLow"], "-0.007695");
        assert_eq!(json["totalPeriodKg"], 45_000);
        assert_eq!(json["annualCo2eTons"], "4.5");
        assert!(json.get("kgPerMetricTon").is_none());
    }
}
