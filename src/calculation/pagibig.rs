//! Pag-IBIG contribution calculation.

use rust_decimal::Decimal;

/// Lowest salary that contributes (1000).
pub const PAGIBIG_LOWER_BOUND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Highest salary that contributes at the low rate (1500).
pub const PAGIBIG_UPPER_BOUND: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Rate for salaries in `[1000, 1500]` (0.01).
pub const PAGIBIG_LOW_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Rate for salaries above 1500 (0.02).
pub const PAGIBIG_HIGH_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Computes the Pag-IBIG contribution for a monthly basic salary.
///
/// The low-rate interval is closed on both ends.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::pagibig_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(pagibig_contribution(dec("999.99")), Decimal::ZERO);
/// assert_eq!(pagibig_contribution(dec("1500")), dec("15.00"));
/// assert_eq!(pagibig_contribution(dec("1500.01")), dec("30.0002"));
/// ```
pub fn pagibig_contribution(basic_salary: Decimal) -> Decimal {
    if basic_salary > PAGIBIG_UPPER_BOUND {
        basic_salary * PAGIBIG_HIGH_RATE
    } else if basic_salary >= PAGIBIG_LOWER_BOUND {
        basic_salary * PAGIBIG_LOW_RATE
    } else {
        Decimal::ZERO
    }
}
