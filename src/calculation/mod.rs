//! Calculation logic for the payroll engine.
//!
//! This module contains time accounting for attendance entries (elapsed
//! minutes, duration formatting, range aggregation), the statutory
//! contribution schedules (SSS, PhilHealth, Pag-IBIG), the progressive
//! withholding tax, the net salary pipeline that chains them, and currency
//! rounding for presentation.

mod net_salary;
mod pagibig;
mod philhealth;
mod rounding;
mod sss;
mod time_accounting;
mod withholding_tax;

pub use net_salary::compute_net_salary;
pub use pagibig::{
    PAGIBIG_HIGH_RATE, PAGIBIG_LOW_RATE, PAGIBIG_LOWER_BOUND, PAGIBIG_UPPER_BOUND,
    pagibig_contribution,
};
pub use philhealth::{
    PHILHEALTH_LOWER_BOUND, PHILHEALTH_MAXIMUM_CONTRIBUTION, PHILHEALTH_MINIMUM_CONTRIBUTION,
    PHILHEALTH_RATE, PHILHEALTH_UPPER_BOUND, philhealth_contribution,
};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use sss::{
    SSS_BRACKET_INCREMENT, SSS_BRACKET_WIDTH, SSS_LOWER_THRESHOLD, SSS_MAXIMUM_CONTRIBUTION,
    SSS_MINIMUM_CONTRIBUTION, SSS_UPPER_THRESHOLD, sss_contribution,
};
pub use time_accounting::{
    DATE_FORMAT, INVALID_DURATION, TIME_FORMAT, aggregate_hours, elapsed_minutes,
    format_duration, minutes_to_hours, parse_date, parse_time, summarize_day, validated_minutes,
};
pub use withholding_tax::{TaxBracket, WITHHOLDING_TAX_BRACKETS, bracket_for, withholding_tax};
