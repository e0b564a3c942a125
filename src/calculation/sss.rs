//! SSS contribution calculation.
//!
//! The employee share of the Social Security System contribution is a
//! step schedule over the monthly basic salary: a floor amount below the
//! first bracket, a fixed increment per 500.00 bracket above it, and a cap.

use rust_decimal::Decimal;

/// Contribution for salaries below [`SSS_LOWER_THRESHOLD`] (135.00).
pub const SSS_MINIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(13500, 0, 0, false, 2);

/// Contribution for salaries at or above [`SSS_UPPER_THRESHOLD`] (1125.00).
pub const SSS_MAXIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(112500, 0, 0, false, 2);

/// Salary at which the first bracket starts (3250).
pub const SSS_LOWER_THRESHOLD: Decimal = Decimal::from_parts(3250, 0, 0, false, 0);

/// Salary at which the contribution is capped (24750).
pub const SSS_UPPER_THRESHOLD: Decimal = Decimal::from_parts(24750, 0, 0, false, 0);

/// Width of each salary bracket (500).
pub const SSS_BRACKET_WIDTH: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Amount added per bracket (22.50).
pub const SSS_BRACKET_INCREMENT: Decimal = Decimal::from_parts(2250, 0, 0, false, 2);

/// Computes the SSS contribution for a monthly basic salary.
///
/// Brackets are half-open: `[3250, 3750)` is the first bracket and yields
/// `135.00 + 22.50`. Every salary from 24750 upward yields the cap.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(sss_contribution(dec("3249.99")), dec("135.00"));
/// assert_eq!(sss_contribution(dec("3250.00")), dec("157.50"));
/// assert_eq!(sss_contribution(dec("24750.00")), dec("1125.00"));
/// ```
pub fn sss_contribution(basic_salary: Decimal) -> Decimal {
    if basic_salary < SSS_LOWER_THRESHOLD {
        return SSS_MINIMUM_CONTRIBUTION;
    }
    if basic_salary >= SSS_UPPER_THRESHOLD {
        return SSS_MAXIMUM_CONTRIBUTION;
    }

    let bracket = ((basic_salary - SSS_LOWER_THRESHOLD) / SSS_BRACKET_WIDTH).floor();
    SSS_MINIMUM_CONTRIBUTION + (bracket + Decimal::ONE) * SSS_BRACKET_INCREMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_below_first_bracket_is_minimum() {
        assert_eq!(sss_contribution(dec("0")), dec("135.00"));
        assert_eq!(sss_contribution(dec("1000")), dec("135.00"));
        assert_eq!(sss_contribution(dec("3249.99")), dec("135.00"));
    }

    #[test]
    fn test_first_bracket_starts_at_threshold() {
        assert_eq!(sss_contribution(dec("3250.00")), dec("157.50"));
        assert_eq!(sss_contribution(dec("3749.99")), dec("157.50"));
    }

    #[test]
    fn test_second_bracket() {
        assert_eq!(sss_contribution(dec("3750.00")), dec("180.00"));
    }

    #[test]
    fn test_last_bracket_below_cap() {
        let contribution = sss_contribution(dec("24749.99"));
        assert!(contribution < dec("1125.00"));
        assert_eq!(contribution, dec("1102.50"));
    }

    #[test]
    fn test_cap() {
        assert_eq!(sss_contribution(dec("24750.00")), dec("1125.00"));
        assert_eq!(sss_contribution(dec("90000")), dec("1125.00"));
    }

    #[test]
    fn test_bracket_boundaries_are_multiples_of_increment() {
        let mut salary = dec("3250");
        while salary < SSS_UPPER_THRESHOLD {
            let above_minimum = sss_contribution(salary) - SSS_MINIMUM_CONTRIBUTION;
            assert_eq!(
                above_minimum % SSS_BRACKET_INCREMENT,
                Decimal::ZERO,
                "salary {} is not on an increment boundary",
                salary
            );
            salary += SSS_BRACKET_WIDTH;
        }
    }

    #[test]
    fn test_contribution_is_non_decreasing() {
        let mut previous = Decimal::ZERO;
        let mut salary = Decimal::ZERO;
        while salary <= dec("30000") {
            let current = sss_contribution(salary);
            assert!(current >= previous, "decreased at salary {}", salary);
            previous = current;
            salary += dec("125");
        }
    }
}
