//! Withholding tax calculation.
//!
//! Progressive monthly withholding tax on taxable income. Each bracket
//! charges a base amount plus a rate on the income in excess of a reference
//! point. The reference point is the bracket's lower bound minus one
//! (20833 for the 20% bracket, not 20832), which is kept exactly as the
//! published schedule applies it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the withholding tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Highest taxable income in this bracket, `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// Fixed tax for reaching this bracket.
    pub base_tax: Decimal,
    /// Income above this amount is taxed at `rate`.
    pub excess_over: Decimal,
    /// Marginal rate for this bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    const fn new(
        upper_bound: Option<Decimal>,
        base_tax: Decimal,
        excess_over: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            base_tax,
            excess_over,
            rate,
        }
    }

    /// Returns true if `income` falls in this bracket, given that it did not
    /// fall in any lower one.
    pub fn covers(&self, income: Decimal) -> bool {
        self.upper_bound.is_none_or(|upper| income <= upper)
    }

    /// Applies this bracket's formula to `income`, never going below zero.
    ///
    /// Only incomes strictly between 20832 and 20833 would otherwise produce
    /// a negative amount, because the excess is measured from 20833.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        (self.base_tax + (income - self.excess_over) * self.rate).max(Decimal::ZERO)
    }
}

const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

/// The monthly withholding tax schedule, lowest bracket first.
pub const WITHHOLDING_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::new(Some(whole(20832)), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    TaxBracket::new(
        Some(whole(33333)),
        Decimal::ZERO,
        whole(20833),
        Decimal::from_parts(20, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Some(whole(66667)),
        whole(2500),
        whole(33333),
        Decimal::from_parts(25, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Some(whole(166667)),
        whole(10833),
        whole(66667),
        Decimal::from_parts(30, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Some(whole(666667)),
        Decimal::from_parts(4083333, 0, 0, false, 2),
        whole(166667),
        Decimal::from_parts(32, 0, 0, false, 2),
    ),
    TaxBracket::new(
        None,
        Decimal::from_parts(20083333, 0, 0, false, 2),
        whole(666667),
        Decimal::from_parts(35, 0, 0, false, 2),
    ),
];

/// Returns the bracket that applies to `taxable_income`.
pub fn bracket_for(taxable_income: Decimal) -> &'static TaxBracket {
    WITHHOLDING_TAX_BRACKETS
        .iter()
        .find(|b| b.covers(taxable_income))
        .unwrap_or(&WITHHOLDING_TAX_BRACKETS[WITHHOLDING_TAX_BRACKETS.len() - 1])
}

/// Computes the withholding tax on a monthly taxable income.
///
/// Income at or below 20832, including negative income, is not taxed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(withholding_tax(dec("20832")), Decimal::ZERO);
/// assert_eq!(withholding_tax(dec("33333")), dec("2500.00"));
/// assert_eq!(withholding_tax(dec("666667")), dec("200833.33"));
/// ```
pub fn withholding_tax(taxable_income: Decimal) -> Decimal {
    bracket_for(taxable_income).tax_on(taxable_income)
}
