//! The "Step 2" impact report in text and JSON form.

use std::fmt;

use impact_engine::{ImpactEngine, ImpactResult, Interpretation, LifestyleChange, interpret};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::CalculatorError;
use crate::format::{fixed, group_thousands};

const HEADLINE_PRECISION_FLOOR: Decimal = dec!(0.01);

/// Warning shown beneath every interpretation.
pub const MORTALITY_CAVEAT: &str = "Note: This estimate only includes direct \
    temperature-related mortality (heat/cold stress). It does NOT include deaths from storms, \
    floods, crop failures, infectious diseases, or conflict. The actual total lives saved is \
    likely HIGHER than shown.";

/// One committed change with its projected savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedChange {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Annual savings in kilograms of CO2e.
    pub annual_kg: u32,
    /// Savings over the projection period in kilograms.
    pub period_kg: u64,
}

/// Everything shown after a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    impact: ImpactResult,
    changes: Vec<CommittedChange>,
    interpretation: Interpretation,
    message: String,
    caveat: &'static str,
}

impl ImpactReport {
    /// Builds a report for a computed result and the changes behind it.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Impact`] if a per-change period total
    /// overflows.
    pub fn new(
        impact: ImpactResult,
        changes: &[&LifestyleChange],
        engine: &ImpactEngine,
    ) -> Result<Self, CalculatorError> {
        let committed = changes
            .iter()
            .map(|change| -> Result<CommittedChange, CalculatorError> {
                Ok(CommittedChange {
                    id: change.id().to_owned(),
                    name: change.name().to_owned(),
                    annual_kg: change.annual_kg(),
                    period_kg: engine.period_kg(u64::from(change.annual_kg()))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let interpretation = interpret(impact.lives_central);
        Ok(Self {
            message: interpretation_message(interpretation),
            impact,
            changes: committed,
            interpretation,
            caveat: MORTALITY_CAVEAT,
        })
    }

    /// Returns the engine result.
    #[must_use]
    pub const fn impact(&self) -> &ImpactResult {
        &self.impact
    }

    /// Returns the committed changes in catalog order.
    #[must_use]
    pub fn changes(&self) -> &[CommittedChange] {
        &self.changes
    }

    /// Returns the interpretation band.
    #[must_use]
    pub const fn interpretation(&self) -> Interpretation {
        self.interpretation
    }

    /// Returns the plain-language interpretation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CalculatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Formats the central estimate with more places for small values.
    #[must_use]
    pub fn headline(&self) -> String {
        let central = self.impact.lives_central;
        if central >= HEADLINE_PRECISION_FLOOR {
            fixed(central, 4)
        } else {
            fixed(central, 6)
        }
    }

    /// Formats the low-to-high range.
    #[must_use]
    pub fn range(&self) -> String {
        format!(
            "(Range: {} to {})",
            fixed(self.impact.lives_low, 6),
            fixed(self.impact.lives_high, 6)
        )
    }
}

impl fmt::Display for ImpactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let impact = &self.impact;
        let years = impact.projection_years;

        writeln!(f, "Your Climate Impact Over {years} Years")?;
        writeln!(f)?;
        writeln!(f, "Estimated Lives Saved:")?;
        writeln!(f, "  {}", self.headline())?;
        writeln!(f, "  {}", self.range())?;
        writeln!(f)?;

        writeln!(f, "CO2e Savings Breakdown")?;
        writeln!(
            f,
            "  Annual CO2e savings: {} kg ({} metric tons)",
            group_thousands(impact.total_annual_kg),
            fixed(impact.annual_co2e_tons, 2)
        )?;
        writeln!(
            f,
            "  {years}-Year CO2e savings: {} kg ({} metric tons)",
            group_thousands(impact.total_period_kg),
            fixed(impact.co2e_tons, 2)
        )?;
        writeln!(f)?;

        writeln!(f, "Your Committed Changes")?;
        for change in &self.changes {
            writeln!(
                f,
                "  \u{2713} {}  {} kg/year \u{d7} {years} = {} kg",
                change.name,
                group_thousands(u64::from(change.annual_kg)),
                group_thousands(change.period_kg)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "What This Means")?;
        writeln!(f, "  {}", self.message)?;
        writeln!(f)?;
        write!(f, "  {}", self.caveat)
    }
}

/// Explains an interpretation band in plain language.
///
/// # Example
///
/// ```
/// use calculator::report::interpretation_message;
/// use impact_engine::Interpretation;
///
/// let message = interpretation_message(Interpretation::SharedCommitment { people: 1475 });
///
/// assert!(message.starts_with("If 1,475 people made these same commitments"));
/// ```
#[must_use]
pub fn interpretation_message(interpretation: Interpretation) -> String {
    match interpretation {
        Interpretation::PrematureDeaths { deaths } => format!(
            "Your commitment could prevent approximately {} premature deaths from \
             temperature-related causes over the next ~80 years.",
            fixed(deaths, 1)
        ),
        Interpretation::ShareOfOneLife {
            percent,
            decimals: 1,
        } => format!(
            "Your commitment represents about {}% of preventing one premature death from \
             climate-related temperature stress.",
            fixed(percent, 1)
        ),
        Interpretation::ShareOfOneLife { percent, decimals } => format!(
            "Your commitment represents about {}% of preventing one premature death. Every \
             contribution matters!",
            fixed(percent, decimals)
        ),
        Interpretation::SharedCommitment { people } => format!(
            "If {} people made these same commitments, together you would prevent \
             approximately 1 premature death from climate change.",
            group_thousands(people)
        ),
        Interpretation::Indeterminate => "At the central estimate your commitment has a \
             negligible or indeterminate effect on temperature-related deaths."
            .to_owned(),
    }
}
