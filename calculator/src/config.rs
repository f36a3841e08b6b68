//! Calculator settings loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::CalculatorError;

const PROGRAM_NAME: &str = "co2e-impact";

/// Output preferences read from the environment and configuration files.
///
/// Command-line flags are parsed separately and take precedence over these
/// values.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CO2E_IMPACT")]
pub struct CalculatorSettings {
    /// Emit the impact report as JSON instead of text.
    #[ortho_config(default = false)]
    pub json: bool,
    /// Format log lines as JSON.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl CalculatorSettings {
    /// Loads settings from configuration files and `CO2E_IMPACT_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Settings`] when a source cannot be parsed.
    pub fn load_layered() -> Result<Self, CalculatorError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            CalculatorError::Settings {
                message: err.to_string(),
            }
        })
    }
}
