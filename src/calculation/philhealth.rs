//! PhilHealth contribution calculation.
//!
//! A flat amount up to 10000, 1.5% of salary between the bounds, and a
//! flat cap from 60000.

use rust_decimal::Decimal;

/// Contribution for salaries at or below [`PHILHEALTH_LOWER_BOUND`] (150.00).
pub const PHILHEALTH_MINIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(15000, 0, 0, false, 2);

/// Contribution for salaries at or above [`PHILHEALTH_UPPER_BOUND`] (900.00).
pub const PHILHEALTH_MAXIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(90000, 0, 0, false, 2);

/// Highest salary that pays the flat minimum (10000).
pub const PHILHEALTH_LOWER_BOUND: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Lowest salary that pays the flat cap (60000).
pub const PHILHEALTH_UPPER_BOUND: Decimal = Decimal::from_parts(60000, 0, 0, false, 0);

/// Employee share between the bounds (0.015).
pub const PHILHEALTH_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// Computes the PhilHealth contribution for a monthly basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::philhealth_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(philhealth_contribution(dec("10000")), dec("150.00"));
/// assert_eq!(philhealth_contribution(dec("20000")), dec("300.00"));
/// assert_eq!(philhealth_contribution(dec("60000")), dec("900.00"));
/// ```
pub fn philhealth_contribution(basic_salary: Decimal) -> Decimal {
    if basic_salary <= PHILHEALTH_LOWER_BOUND {
        PHILHEALTH_MINIMUM_CONTRIBUTION
    } else if basic_salary < PHILHEALTH_UPPER_BOUND {
        basic_salary * PHILHEALTH_RATE
    } else {
        PHILHEALTH_MAXIMUM_CONTRIBUTION
    }
}
