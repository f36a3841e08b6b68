//! Methodology and sources text.

use std::fmt;

use impact_engine::{ImpactParameters, Interpretation, interpret};

use crate::format::group_thousands;

/// Primary source for the Mortality Cost of Carbon.
pub const PRIMARY_SOURCE_URL: &str = "https://www.nature.com/articles/s41467-021-24487-w";

const DERIVATION: &str = "\
The MCC was derived by:
1. Extending the DICE-2016 integrated assessment model
2. Adding temperature-mortality damage functions from epidemiological studies
3. Using meta-analysis of global temperature-mortality relationships
4. Projecting deaths under baseline emissions scenarios";

const SAVINGS_SOURCES: &str = "\
Lifestyle Change CO2e Values:

- Flight emissions: myclimate calculator, Carbon Independent
  (includes radiative forcing multiplier for high-altitude emissions)

- Diet changes: Scarborough et al. (2014) \"Dietary greenhouse gas emissions\"
  published in Climatic Change; Our World in Data; Energy Saving Trust UK

- Transportation: Wynes & Nicholas (2017) \"The climate mitigation gap\"
  Environmental Research Letters; World Resources Institute

- Home energy: Carbon Brief, US EPA, Energy Saving Trust

- Food waste: Project Drawdown, WRAP UK

All values represent conservative estimates based on peer-reviewed research
and government environmental agency data.";

const LIMITATIONS: &str = "\
- The MCC only includes direct temperature-related mortality (heat/cold stress)

- Does NOT include deaths from: storms, floods, droughts, crop failures,
  infectious disease spread, water scarcity, conflict, or migration

- Actual total climate mortality impact is likely HIGHER than calculated

- CO2e savings estimates vary by region, lifestyle, and individual circumstances

- Estimates have significant uncertainty ranges (shown in results)

- Based on 2020 baseline emissions scenario projections";

/// The "Methodology & Sources" page for a set of parameters.
///
/// # Example
///
/// ```
/// use calculator::methodology::Methodology;
/// use impact_engine::ImpactParameters;
///
/// let text = Methodology::new(ImpactParameters::default()).to_string();
///
/// assert!(text.contains("Lives Saved = (Total CO2e in kg \u{f7} 1000) \u{d7} 0.000226"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Methodology {
    parameters: ImpactParameters,
}

impl Methodology {
    /// Creates the page for the given parameters.
    #[must_use]
    pub const fn new(parameters: ImpactParameters) -> Self {
        Self { parameters }
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.parameters.coefficients();

        writeln!(f, "Methodology & Scientific Sources")?;
        writeln!(f)?;
        writeln!(f, "Lives Saved Calculation")?;
        writeln!(f, "Formula:")?;
        writeln!(
            f,
            "Lives Saved = (Total CO2e in kg \u{f7} {}) \u{d7} {}",
            self.parameters.kg_per_metric_ton(),
            coefficients.central
        )?;
        writeln!(f)?;
        writeln!(f, "This uses the \"Mortality Cost of Carbon\" (MCC) metric:")?;
        writeln!(
            f,
            "- Central estimate: {} deaths per metric ton CO2e (range {} to {})",
            coefficients.central, coefficients.low, coefficients.high
        )?;
        if let Interpretation::SharedCommitment { people } = interpret(coefficients.central) {
            writeln!(
                f,
                "- Equals approximately 1 life per {} metric tons of CO2e",
                group_thousands(people)
            )?;
        }
        writeln!(
            f,
            "- Timeframe: Deaths prevented over 2020-2100 (~80 years)"
        )?;
        writeln!(f)?;
        writeln!(f, "{DERIVATION}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Primary Source: Bressler (2021) - Nature Communications"
        )?;
        writeln!(f, "  {PRIMARY_SOURCE_URL}")?;
        writeln!(f)?;
        writeln!(f, "CO2e Savings Sources")?;
        writeln!(f, "{SAVINGS_SOURCES}")?;
        writeln!(f)?;
        writeln!(f, "Important Limitations")?;
        write!(f, "{LIMITATIONS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_coefficients_and_source() {
        let text = Methodology::new(ImpactParameters::default()).to_string();

        assert!(text.starts_with("Methodology & Scientific Sources"));
        assert!(text.contains(
            "Central estimate: 0.000226 deaths per metric ton CO2e (range -0.000171 to 0.000678)"
        ));
        assert!(text.contains("1 life per 4,425 metric tons"));
        assert!(text.contains(PRIMARY_SOURCE_URL));
        assert!(text.ends_with("Based on 2020 baseline emissions scenario projections"));
    }
}
