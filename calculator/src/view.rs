//! Checklist view over the lifestyle-change catalog.
//!
//! The view only tracks which identifiers are ticked. Totals and estimates
//! always come from the engine.

use std::collections::BTreeMap;
use std::fmt;

use impact_engine::{Catalog, ImpactEngine, ImpactError, Selection, SelectionSummary};
use tracing::{debug, info, warn};

use crate::cli::Choice;
use crate::error::CalculatorError;
use crate::format::group_thousands;
use crate::report::ImpactReport;

/// Tick-box state for every catalog entry.
#[derive(Debug, Clone)]
pub struct ChecklistView {
    catalog: Catalog,
    engine: ImpactEngine,
    checked: BTreeMap<String, bool>,
}

impl ChecklistView {
    /// Creates a view with nothing ticked.
    #[must_use]
    pub fn new(catalog: Catalog, engine: ImpactEngine) -> Self {
        let checked = catalog
            .list_all()
            .iter()
            .map(|change| (change.id().to_owned(), false))
            .collect();
        Self {
            catalog,
            engine,
            checked,
        }
    }

    /// Returns the catalog the view was seeded from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns whether the identifier is ticked.
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Flips the tick for `id` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownChange`] if `id` is not in the
    /// catalog.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CalculatorError> {
        let state = self.slot(id)?;
        *state = !*state;
        let checked = *state;
        debug!(id, checked, "toggled lifestyle change");
        Ok(checked)
    }

    /// Sets the tick for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownChange`] if `id` is not in the
    /// catalog.
    pub fn set(&mut self, id: &str, checked: bool) -> Result<(), CalculatorError> {
        *self.slot(id)? = checked;
        debug!(id, checked, "set lifestyle change");
        Ok(())
    }

    /// Ticks every catalog entry.
    pub fn select_all(&mut self) {
        self.checked.values_mut().for_each(|state| *state = true);
        debug!(count = self.checked.len(), "selected every lifestyle change");
    }

    /// Clears every tick.
    pub fn clear(&mut self) {
        self.checked.values_mut().for_each(|state| *state = false);
        debug!("cleared selection");
    }

    /// Applies a command-line choice on top of the current ticks.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownChange`] for the first identifier
    /// not in the catalog.
    pub fn apply(&mut self, choice: &Choice) -> Result<(), CalculatorError> {
        match choice {
            Choice::All => {
                self.select_all();
                Ok(())
            }
            Choice::Ids(ids) => ids.iter().try_for_each(|id| self.set(id, true)),
        }
    }

    /// Returns the ticked identifiers as an engine selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.checked
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Returns running totals for the ticked changes.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Impact`] if the totals overflow.
    pub fn summary(&self) -> Result<SelectionSummary, CalculatorError> {
        Ok(self.engine.summarize(&self.catalog, &self.selection())?)
    }

    /// Formats the running summary shown beneath the checklist.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Impact`] if the totals overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use calculator::view::ChecklistView;
    /// use impact_engine::{Catalog, ImpactEngine};
    ///
    /// let mut view = ChecklistView::new(Catalog::standard(), ImpactEngine::default());
    /// view.set("flight_syd_lon", true).expect("known id");
    ///
    /// assert_eq!(
    ///     view.summary_line().expect("summary"),
    ///     "Selected: 1 changes | Annual savings: 4,500 kg CO2e | 10-year total: 45,000 kg CO2e"
    /// );
    /// ```
    pub fn summary_line(&self) -> Result<String, CalculatorError> {
        let summary = self.summary()?;
        Ok(format!(
            "Selected: {} changes | Annual savings: {} kg CO2e | {}-year total: {} kg CO2e",
            summary.count,
            group_thousands(summary.total_annual_kg),
            self.engine.parameters().projection_years(),
            group_thousands(summary.total_period_kg),
        ))
    }

    /// Calculates the impact of the ticked changes.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NoSelection`] when nothing is ticked and
    /// [`CalculatorError::Impact`] if the engine rejects the calculation.
    pub fn calculate(&self) -> Result<ImpactReport, CalculatorError> {
        let selection = self.selection();
        let changes = match selection.resolve(&self.catalog) {
            Ok(changes) => changes,
            Err(ImpactError::EmptySelection) => {
                warn!("calculation requested with no lifestyle changes selected");
                return Err(CalculatorError::NoSelection);
            }
            Err(err) => return Err(err.into()),
        };
        let result = self.engine.compute(changes.iter().copied())?;
        info!(
            selected = result.selected_count,
            total_annual_kg = result.total_annual_kg,
            lives_central = %result.lives_central,
            "calculated impact"
        );
        ImpactReport::new(result, &changes, &self.engine)
    }

    /// Returns a displayable rendering of the catalog cards.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Impact`] if the running summary cannot be
    /// computed.
    pub fn cards(&self) -> Result<Cards<'_>, CalculatorError> {
        Ok(Cards {
            view: self,
            summary_line: self.summary_line()?,
        })
    }

    fn slot(&mut self, id: &str) -> Result<&mut bool, CalculatorError> {
        self.checked
            .get_mut(id)
            .ok_or_else(|| CalculatorError::UnknownChange { id: id.to_owned() })
    }
}

/// Text rendering of the lifestyle-change cards in catalog order.
#[derive(Debug, Clone)]
pub struct Cards<'a> {
    view: &'a ChecklistView,
    summary_line: String,
}

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step 1: Choose Life Changes")?;
        writeln!(f)?;
        writeln!(f, "Select Climate-Friendly Life Changes")?;
        writeln!(
            f,
            "Choose the changes you commit to making. We'll calculate your {}-year impact.",
            self.view.engine.parameters().projection_years()
        )?;
        for change in self.view.catalog.list_all() {
            let tick = if self.view.is_checked(change.id()) {
                "x"
            } else {
                " "
            };
            writeln!(f)?;
            writeln!(f, "[{tick}] {} ({})", change.name(), change.id())?;
            writeln!(
                f,
                "    {} kg CO2e/year",
                group_thousands(u64::from(change.annual_kg()))
            )?;
            writeln!(f, "    {}", change.description())?;
            writeln!(f, "    Source: {}", change.source())?;
        }
        writeln!(f)?;
        write!(f, "{}", self.summary_line)
    }
}

#[cfg(test)]
mod tests {
    use impact_engine::{ImpactParameters, LifestyleChange, MortalityCoefficients};
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::*;

    #[fixture]
    fn view() -> ChecklistView {
        ChecklistView::new(Catalog::standard(), ImpactEngine::default())
    }

    #[rstest]
    fn starts_with_nothing_checked(view: ChecklistView) {
        assert!(view.selection().is_empty());
        assert_eq!(
            view.summary_line().expect("summary"),
            "Selected: 0 changes | Annual savings: 0 kg CO2e | 10-year total: 0 kg CO2e"
        );
    }

    #[rstest]
    fn toggle_flips_state(mut view: ChecklistView) {
        assert!(view.toggle("reduce_meat").expect("known id"));
        assert!(view.is_checked("reduce_meat"));
        assert!(!view.toggle("reduce_meat").expect("known id"));
        assert!(!view.is_checked("reduce_meat"));
    }

    #[rstest]
    fn unknown_ids_are_rejected(mut view: ChecklistView) {
        let err = view.set("fly_more", true).expect_err("unknown id");

        assert!(matches!(err, CalculatorError::UnknownChange { id } if id == "fly_more"));
    }

    #[rstest]
    fn summary_tracks_ticks(mut view: ChecklistView) {
        view.apply(&Choice::Ids(vec![
            "flight_syd_lon".to_owned(),
            "reduce_meat".to_owned(),
            "go_car_free".to_owned(),
        ]))
        .expect("known ids");

        assert_eq!(
            view.summary_line().expect("summary"),
            "Selected: 3 changes | Annual savings: 7,820 kg CO2e | 10-year total: 78,200 kg CO2e"
        );
    }

    #[rstest]
    fn select_all_then_clear(mut view: ChecklistView) {
        view.select_all();
        assert_eq!(view.selection().len(), 10);

        view.clear();
        assert!(view.selection().is_empty());
    }

    #[rstest]
    fn calculating_nothing_is_rejected(view: ChecklistView) {
        assert!(matches!(
            view.calculate(),
            Err(CalculatorError::NoSelection)
        ));
    }

    #[rstest]
    fn calculate_uses_ticked_changes(mut view: ChecklistView) {
        view.set("flight_syd_lon", true).expect("known id");

        let report = view.calculate().expect("report");

        assert_eq!(report.impact().total_annual_kg, 4500);
        assert_eq!(report.changes().len(), 1);
    }

    #[rstest]
    fn cards_mark_checked_entries(mut view: ChecklistView) {
        view.set("reduce_food_waste", true).expect("known id");

        let cards = view.cards().expect("cards").to_string();

        assert!(cards.starts_with("Step 1: Choose Life Changes"));
        assert!(cards.contains("[x] Reduce food waste by 50% (reduce_food_waste)"));
        assert!(cards.contains(
            "[ ] Avoid one Sydney-London round-trip flight per year (flight_syd_lon)"
        ));
        assert!(cards.contains("    4,500 kg CO2e/year"));
        assert!(cards.ends_with("10-year total: 3,000 kg CO2e"));
    }

    #[test]
    fn cards_surface_summary_failures() {
        let parameters =
            ImpactParameters::new(MortalityCoefficients::BRESSLER_2021, u32::MAX, dec!(1000))
                .expect("valid parameters");
        let catalog = Catalog::new(vec![
            LifestyleChange::new("first", "First", u32::MAX, "", ""),
            LifestyleChange::new("second", "Second", u32::MAX, "", ""),
        ])
        .expect("valid catalog");
        let mut view = ChecklistView::new(catalog, ImpactEngine::new(parameters));
        view.select_all();

        let err = view.cards().expect_err("period total overflows");

        assert!(matches!(
            err,
            CalculatorError::Impact {
                source: ImpactError::ArithmeticOverflow {
                    stage: "period total"
                }
            }
        ));
    }
}
