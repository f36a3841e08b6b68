//! Plain-language bands for a central lives-saved estimate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

const ONE_LIFE: Decimal = dec!(1);
const COARSE_SHARE_FLOOR: Decimal = dec!(0.1);
const FINE_SHARE_FLOOR: Decimal = dec!(0.01);
const PERCENT: Decimal = dec!(100);

/// How a central estimate should be explained to a reader.
///
/// # Example
///
/// ```
/// use impact_engine::{Interpretation, interpret};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     interpret(dec!(0.000678)),
///     Interpretation::SharedCommitment { people: 1475 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Interpretation {
    /// At least one premature death prevented over the ~80-year horizon.
    PrematureDeaths {
        /// Deaths prevented, rounded to one decimal place.
        deaths: Decimal,
    },
    /// A share of one prevented death.
    ShareOfOneLife {
        /// Percentage of one life, rounded to `decimals` places.
        percent: Decimal,
        /// Number of decimal places shown.
        decimals: u32,
    },
    /// Number of people making the same commitment to prevent one death.
    SharedCommitment {
        /// `1 / central`, rounded half away from zero.
        people: u64,
    },
    /// The central estimate is zero or negative.
    Indeterminate,
}

/// Classifies a central lives-saved estimate.
///
/// Estimates of zero or below map to [`Interpretation::Indeterminate`]
/// instead of dividing by them.
#[must_use]
pub fn interpret(lives_central: Decimal) -> Interpretation {
    if lives_central >= ONE_LIFE {
        return Interpretation::PrematureDeaths {
            deaths: round_half_up(lives_central, 1),
        };
    }
    if lives_central >= COARSE_SHARE_FLOOR {
        return share_of_one_life(lives_central, 1);
    }
    if lives_central >= FINE_SHARE_FLOOR {
        return share_of_one_life(lives_central, 2);
    }
    if lives_central <= Decimal::ZERO {
        return Interpretation::Indeterminate;
    }
    ONE_LIFE
        .checked_div(lives_central)
        .map(|people| round_half_up(people, 0))
        .and_then(|people| people.to_u64())
        .map_or(Interpretation::Indeterminate, |people| {
            Interpretation::SharedCommitment { people }
        })
}

fn share_of_one_life(lives_central: Decimal, decimals: u32) -> Interpretation {
    // Callers pass values below one life, so scaling by 100 stays in range.
    let percent = lives_central * PERCENT;
    Interpretation::ShareOfOneLife {
        percent: round_half_up(percent, decimals),
        decimals,
    }
}

fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(dec!(1), dec!(1.0))]
    #[case(dec!(2.34), dec!(2.3))]
    #[case(dec!(12.25), dec!(12.3))]
    fn whole_lives_round_to_one_place(#[case] central: Decimal, #[case] deaths: Decimal) {
        assert_eq!(
            interpret(central),
            Interpretation::PrematureDeaths { deaths }
        );
    }

    #[rstest]
    #[case(dec!(0.1), dec!(10.0), 1)]
    #[case(dec!(0.99), dec!(99.0), 1)]
    #[case(dec!(0.99995), dec!(100.0), 1)]
    #[case(dec!(0.3015), dec!(30.2), 1)]
    #[case(dec!(0.0301484), dec!(3.01), 2)]
    #[case(dec!(0.01017), dec!(1.02), 2)]
    #[case(dec!(0.01), dec!(1.00), 2)]
    #[case(dec!(0.0123456789012345678901234567), dec!(1.23), 2)]
    fn fractions_become_percentages(
        #[case] central: Decimal,
        #[case] percent: Decimal,
        #[case] decimals: u32,
    ) {
        assert_eq!(
            interpret(central),
            Interpretation::ShareOfOneLife { percent, decimals }
        );
    }

    #[rstest]
    #[case(dec!(0.000678), 1475)]
    #[case(dec!(0.000226), 4425)]
    #[case(dec!(0.0099), 101)]
    #[case(dec!(0.002), 500)]
    fn small_estimates_become_shared_commitments(#[case] central: Decimal, #[case] people: u64) {
        assert_eq!(
            interpret(central),
            Interpretation::SharedCommitment { people }
        );
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(dec!(-0.007695))]
    #[case(dec!(-3))]
    fn non_positive_estimates_are_indeterminate(#[case] central: Decimal) {
        assert_eq!(interpret(central), Interpretation::Indeterminate);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(interpret(dec!(0.000678))).expect("serialize");

        assert_eq!(json["kind"], "sharedCommitment");
        assert_eq!(json["people"], 1475);
    }
}
