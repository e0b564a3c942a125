//! Currency rounding for presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary values are shown with.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to two decimal places, midpoint away from zero.
///
/// Computation keeps full precision; this is only applied to values about to
/// be displayed or serialized for a caller.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     round_currency(Decimal::from_str("150.005").unwrap()),
///     Decimal::from_str("150.01").unwrap()
/// );
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
