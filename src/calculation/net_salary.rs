//! Net salary pipeline.
//!
//! This module runs the four statutory stages over a monthly basic salary:
//! SSS, PhilHealth and Pag-IBIG contributions are deducted to obtain the
//! taxable income, withholding tax is computed on that, and the remainder is
//! the net salary. Every stage is recorded as an [`AuditStep`].

use rust_decimal::Decimal;

use crate::models::{AuditStep, NetSalaryBreakdown};

use super::pagibig::pagibig_contribution;
use super::philhealth::philhealth_contribution;
use super::sss::sss_contribution;
use super::withholding_tax::{bracket_for, withholding_tax};

fn contribution_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    basic_salary: Decimal,
    amount: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} on basic salary {} is {}",
            rule_name,
            basic_salary.normalize(),
            amount.normalize()
        ),
    }
}

/// Computes the full net salary breakdown for a monthly basic salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_net_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let breakdown = compute_net_salary(dec("90000"));
/// assert_eq!(breakdown.sss, dec("1125.00"));
/// assert_eq!(breakdown.philhealth, dec("900.00"));
/// assert_eq!(breakdown.pagibig, dec("1800.00"));
/// assert_eq!(breakdown.taxable_income, dec("86175"));
/// assert_eq!(breakdown.withholding_tax, dec("16685.40"));
/// assert_eq!(breakdown.net_salary, dec("69489.60"));
/// ```
pub fn compute_net_salary(basic_salary: Decimal) -> NetSalaryBreakdown {
    let sss = sss_contribution(basic_salary);
    let philhealth = philhealth_contribution(basic_salary);
    let pagibig = pagibig_contribution(basic_salary);

    let total_contributions = sss + philhealth + pagibig;
    let taxable_income = basic_salary - total_contributions;

    let tax = withholding_tax(taxable_income);
    let net_salary = taxable_income - tax;

    let bracket = bracket_for(taxable_income);

    let audit = vec![
        contribution_step(1, "sss_contribution", "SSS Contribution", basic_salary, sss),
        contribution_step(
            2,
            "philhealth_contribution",
            "PhilHealth Contribution",
            basic_salary,
            philhealth,
        ),
        contribution_step(
            3,
            "pagibig_contribution",
            "Pag-IBIG Contribution",
            basic_salary,
            pagibig,
        ),
        AuditStep {
            step_number: 4,
            rule_id: "taxable_income".to_string(),
            rule_name: "Taxable Income".to_string(),
            input: serde_json::json!({
                "basic_salary": basic_salary.normalize().to_string(),
                "total_contributions": total_contributions.normalize().to_string()
            }),
            output: serde_json::json!({
                "taxable_income": taxable_income.normalize().to_string()
            }),
            reasoning: format!(
                "{} - {} = {}",
                basic_salary.normalize(),
                total_contributions.normalize(),
                taxable_income.normalize()
            ),
        },
        AuditStep {
            step_number: 5,
            rule_id: "withholding_tax".to_string(),
            rule_name: "Withholding Tax".to_string(),
            input: serde_json::json!({
                "taxable_income": taxable_income.normalize().to_string()
            }),
            output: serde_json::json!({
                "withholding_tax": tax.normalize().to_string(),
                "base_tax": bracket.base_tax.normalize().to_string(),
                "excess_over": bracket.excess_over.normalize().to_string(),
                "rate": bracket.rate.normalize().to_string()
            }),
            reasoning: if bracket.rate.is_zero() {
                format!(
                    "Taxable income {} is in the untaxed bracket",
                    taxable_income.normalize()
                )
            } else {
                format!(
                    "{} + ({} - {}) x {} = {}",
                    bracket.base_tax.normalize(),
                    taxable_income.normalize(),
                    bracket.excess_over.normalize(),
                    bracket.rate.normalize(),
                    tax.normalize()
                )
            },
        },
        AuditStep {
            step_number: 6,
            rule_id: "net_salary".to_string(),
            rule_name: "Net Salary".to_string(),
            input: serde_json::json!({
                "taxable_income": taxable_income.normalize().to_string(),
                "withholding_tax": tax.normalize().to_string()
            }),
            output: serde_json::json!({
                "net_salary": net_salary.normalize().to_string()
            }),
            reasoning: format!(
                "{} - {} = {}",
                taxable_income.normalize(),
                tax.normalize(),
                net_salary.normalize()
            ),
        },
    ];

    NetSalaryBreakdown {
        basic_salary,
        sss,
        philhealth,
        pagibig,
        total_contributions,
        taxable_income,
        withholding_tax: tax,
        net_salary,
        audit,
    }
}
