//! Number formatting shared by the text views.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an integer with comma thousands separators.
///
/// # Example
///
/// ```
/// use calculator::format::group_thousands;
///
/// assert_eq!(group_thousands(133_400), "133,400");
/// ```
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let reversed: Vec<char> = value.to_string().chars().rev().collect();
    let groups: Vec<String> = reversed
        .chunks(3)
        .map(|group| group.iter().rev().collect())
        .rev()
        .collect();
    groups.join(",")
}

/// Rounds half away from zero and shows exactly `places` decimals.
///
/// # Example
///
/// ```
/// use calculator::format::fixed;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(fixed(dec!(0.01017), 4), "0.0102");
/// assert_eq!(fixed(dec!(45), 2), "45.00");
/// ```
#[must_use]
pub fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let width = usize::try_from(places).unwrap_or(usize::MAX);
    format!("{rounded:.width$}")
}
