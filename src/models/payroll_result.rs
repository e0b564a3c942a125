//! Result models for payroll queries.
//!
//! This module contains the structured values returned by the payroll
//! service: per-day hours breakdowns, gross salary reports, and the net
//! salary breakdown with its audit trail. Amounts keep full precision;
//! presentation layers call the `rounded` helpers.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;

/// Whether a day's clock times form a usable shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Clock-out is at or after clock-in.
    Valid,
    /// Clock-out is before clock-in; the day is excluded from totals.
    NegativeDuration,
}

/// Hours worked on a single day within a queried range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DailyHours, ShiftStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let day = DailyHours {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     clock_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     minutes: 540,
///     duration: "9:00".to_string(),
///     status: ShiftStatus::Valid,
/// };
/// assert!(day.counts_toward_total());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// The date worked.
    pub date: NaiveDate,
    /// Recorded clock-in.
    pub clock_in: NaiveTime,
    /// Recorded clock-out.
    pub clock_out: NaiveTime,
    /// Elapsed minutes, negative for a misordered entry.
    pub minutes: i64,
    /// Elapsed time formatted as "H:MM", or "Invalid".
    pub duration: String,
    /// Whether this day is counted.
    pub status: ShiftStatus,
}

impl DailyHours {
    /// Returns true if this day contributes to the range total.
    pub fn counts_toward_total(&self) -> bool {
        self.status == ShiftStatus::Valid
    }
}

/// Hours worked by an employee over a closed date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWorkedReport {
    /// The employee queried.
    pub employee_id: String,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// One line per attendance entry in the range, ascending by date.
    pub days: Vec<DailyHours>,
    /// Sum of minutes over valid days.
    pub total_minutes: i64,
    /// `total_minutes / 60`.
    pub total_hours: Decimal,
    /// `total_minutes` formatted as "H:MM".
    pub total_duration: String,
    /// Dates excluded from the total because clock-out preceded clock-in.
    pub flagged_dates: Vec<NaiveDate>,
}

impl HoursWorkedReport {
    /// Returns true if any day in the range was excluded as invalid.
    pub fn has_flagged_days(&self) -> bool {
        !self.flagged_dates.is_empty()
    }
}

/// Gross salary earned over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSalaryReport {
    /// The employee queried.
    pub employee_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// Total valid hours in the range.
    pub total_hours: Decimal,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// `total_hours * hourly_rate`, unrounded.
    pub gross_salary: Decimal,
    /// Dates excluded from the hours total.
    pub flagged_dates: Vec<NaiveDate>,
}

impl GrossSalaryReport {
    /// Returns a copy with monetary values rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            gross_salary: round_currency(self.gross_salary),
            ..self.clone()
        }
    }
}

/// A single step in the audit trail of a deduction pipeline.
///
/// Each step captures the input, output, and reasoning for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The statutory deduction pipeline applied to a basic salary.
///
/// Invariant: `taxable_income = basic_salary - total_contributions` and
/// `net_salary = taxable_income - withholding_tax`, exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryBreakdown {
    /// The monthly basic salary the pipeline started from.
    pub basic_salary: Decimal,
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Sum of the three contributions.
    pub total_contributions: Decimal,
    /// Basic salary less contributions.
    pub taxable_income: Decimal,
    /// Withholding tax on the taxable income.
    pub withholding_tax: Decimal,
    /// Taxable income less withholding tax.
    pub net_salary: Decimal,
    /// One step per pipeline stage.
    pub audit: Vec<AuditStep>,
}

impl NetSalaryBreakdown {
    /// Returns a copy with every monetary field rounded to two decimal places.
    ///
    /// Rounding is applied field by field for display, so the rounded copy
    /// need not satisfy the exact arithmetic invariant.
    pub fn rounded(&self) -> Self {
        Self {
            basic_salary: round_currency(self.basic_salary),
            sss: round_currency(self.sss),
            philhealth: round_currency(self.philhealth),
            pagibig: round_currency(self.pagibig),
            total_contributions: round_currency(self.total_contributions),
            taxable_income: round_currency(self.taxable_income),
            withholding_tax: round_currency(self.withholding_tax),
            net_salary: round_currency(self.net_salary),
            audit: self.audit.clone(),
        }
    }
}

/// Net salary for a named employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryReport {
    /// The employee queried.
    pub employee_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The deduction pipeline result.
    pub breakdown: NetSalaryBreakdown,
}

impl NetSalaryReport {
    /// Returns a copy with the breakdown rounded for display.
    pub fn rounded(&self) -> Self {
        Self {
            breakdown: self.breakdown.rounded(),
            ..self.clone()
        }
    }
}
