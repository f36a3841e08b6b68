//! Command-line arguments for the `co2e-impact` binary.
//!
//! Parsing lives in the library so the resolved [`Action`] can be exercised
//! in tests without spawning a process.

use std::ffi::OsString;

use clap::Parser;

/// `co2e-impact` command arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "co2e-impact",
    about = "Estimate lives saved over ~80 years by committing to climate-friendly life changes",
    version
)]
pub struct CliArgs {
    /// Select a lifestyle change by identifier. Repeat to select several.
    #[arg(short = 's', long = "select", value_name = "id")]
    pub select: Vec<String>,
    /// Select every lifestyle change in the catalog.
    #[arg(long = "all")]
    pub all: bool,
    /// Show the lifestyle-change cards instead of calculating.
    #[arg(long = "list", conflicts_with = "methodology")]
    pub list: bool,
    /// Show the methodology and scientific sources.
    #[arg(long = "methodology", conflicts_with_all = ["select", "all"])]
    pub methodology: bool,
    /// Emit the impact report as JSON.
    #[arg(long = "json", conflicts_with_all = ["list", "methodology"])]
    pub json: bool,
}

/// What the binary should do for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the lifestyle-change cards, marking any selected entries.
    List(Choice),
    /// Print the methodology text.
    Methodology,
    /// Calculate and report the impact of the chosen changes.
    Calculate(Choice),
}

/// Which lifestyle changes the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Every catalog entry.
    All,
    /// The listed identifiers, possibly none.
    Ids(Vec<String>),
}

impl CliArgs {
    /// Parses arguments, including the program name, without exiting.
    ///
    /// # Errors
    ///
    /// Returns the [`clap::Error`] describing invalid usage, or the help and
    /// version requests that clap reports as errors.
    ///
    /// # Example
    ///
    /// ```
    /// use calculator::cli::{Action, Choice, CliArgs};
    ///
    /// let args = CliArgs::parse_from_args(["co2e-impact", "-s", "reduce_meat"]).expect("parse");
    ///
    /// assert_eq!(
    ///     args.action(),
    ///     Action::Calculate(Choice::Ids(vec!["reduce_meat".to_owned()]))
    /// );
    /// ```
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Resolves the flags into a single action.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.methodology {
            return Action::Methodology;
        }
        let choice = self.choice();
        if self.list {
            Action::List(choice)
        } else {
            Action::Calculate(choice)
        }
    }

    /// Returns whether JSON output is requested by flag or setting.
    #[must_use]
    pub const fn wants_json(&self, json_setting: bool) -> bool {
        self.json || json_setting
    }

    fn choice(&self) -> Choice {
        if self.all {
            Choice::All
        } else {
            Choice::Ids(self.select.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from_args(std::iter::once("co2e-impact").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[rstest]
    fn no_flags_calculate_an_empty_choice() {
        assert_eq!(parse(&[]).action(), Action::Calculate(Choice::Ids(Vec::new())));
    }

    #[rstest]
    fn repeated_select_flags_accumulate() {
        let args = parse(&["-s", "flight_syd_lon", "--select", "go_car_free"]);

        assert_eq!(
            args.action(),
            Action::Calculate(Choice::Ids(vec![
                "flight_syd_lon".to_owned(),
                "go_car_free".to_owned(),
            ]))
        );
    }

    #[rstest]
    #[case(&["--all"], Action::Calculate(Choice::All))]
    #[case(&["--all", "-s", "reduce_meat"], Action::Calculate(Choice::All))]
    #[case(&["--list"], Action::List(Choice::Ids(Vec::new())))]
    #[case(&["--list", "--all"], Action::List(Choice::All))]
    #[case(&["--methodology"], Action::Methodology)]
    fn flags_resolve_to_actions(#[case] args: &[&str], #[case] expected: Action) {
        assert_eq!(parse(args).action(), expected);
    }

    #[rstest]
    #[case(&["--methodology", "--all"])]
    #[case(&["--methodology", "--list"])]
    #[case(&["--list", "--json"])]
    #[case(&["--methodology", "--json"])]
    #[case(&["--unknown"])]
    #[case(&["--select"])]
    fn invalid_usage_is_rejected(#[case] args: &[&str]) {
        let result =
            CliArgs::parse_from_args(std::iter::once("co2e-impact").chain(args.iter().copied()));

        assert!(result.is_err());
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    fn json_flag_or_setting_enables_json(
        #[case] flag: bool,
        #[case] setting: bool,
        #[case] expected: bool,
    ) {
        let args = CliArgs {
            json: flag,
            ..CliArgs::default()
        };

        assert_eq!(args.wants_json(setting), expected);
    }
}
