//! Request types for the payroll API.
//!
//! Only the range endpoints take input beyond the path: a `start` and `end`
//! date in the query string, formatted MM/DD/YYYY.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_date;
use crate::error::PayrollResult;

/// Query string for `/employees/:id/hours` and `/employees/:id/gross`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeQuery {
    /// First date of the range, inclusive (MM/DD/YYYY).
    pub start: String,
    /// Last date of the range, inclusive (MM/DD/YYYY).
    pub end: String,
}

impl DateRangeQuery {
    /// Parses both bounds.
    ///
    /// An inverted range parses fine and later yields an empty result.
    pub fn parse(&self) -> PayrollResult<(NaiveDate, NaiveDate)> {
        Ok((parse_date(&self.start)?, parse_date(&self.end)?))
    }
}
