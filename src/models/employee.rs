//! Employee model.
//!
//! This module defines the Employee struct holding the master data used
//! for payroll queries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee's payroll profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's date of birth.
    pub birthday: NaiveDate,
    /// Monthly basic salary, the basis of the net salary computation.
    pub basic_salary: Decimal,
    /// Hourly rate, the basis of the gross salary computation.
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Returns the employee's name as "First Last".
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "10001".to_string(),
    ///     last_name: "Garcia".to_string(),
    ///     first_name: "Manuel III".to_string(),
    ///     birthday: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
    ///     basic_salary: Decimal::new(90000, 0),
    ///     hourly_rate: Decimal::new(53571, 2),
    /// };
    /// assert_eq!(employee.full_name(), "Manuel III Garcia");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
