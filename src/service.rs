//! Payroll service.
//!
//! Answers the four payroll queries against an [`EmployeeDirectory`] and an
//! [`AttendanceLedger`]. The service owns both and never mutates them, so a
//! built service can be shared read-only across threads.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{aggregate_hours, compute_net_salary};
use crate::directory::EmployeeDirectory;
use crate::error::{PayrollError, PayrollResult};
use crate::ledger::AttendanceLedger;
use crate::models::{Employee, GrossSalaryReport, HoursWorkedReport, NetSalaryReport};

/// Orchestrates payroll queries.
#[derive(Debug, Clone, Default)]
pub struct PayrollService {
    directory: EmployeeDirectory,
    ledger: AttendanceLedger,
}

impl PayrollService {
    /// Creates a service over loaded employee and attendance data.
    pub fn new(directory: EmployeeDirectory, ledger: AttendanceLedger) -> Self {
        Self { directory, ledger }
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Returns the attendance ledger.
    pub fn ledger(&self) -> &AttendanceLedger {
        &self.ledger
    }

    /// Returns all employee ids in ascending order.
    pub fn employee_ids(&self) -> Vec<&str> {
        self.directory.employee_ids()
    }

    /// Looks up an employee's profile.
    pub fn employee_info(&self, employee_id: &str) -> PayrollResult<&Employee> {
        self.directory.lookup(employee_id)
    }

    /// Computes hours worked over `[start, end]`.
    ///
    /// Requires the employee to have attendance records. An inverted range
    /// gives an empty report rather than an error.
    pub fn hours_worked(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<HoursWorkedReport> {
        if !self.ledger.contains_employee(employee_id) {
            return Err(PayrollError::AttendanceNotFound {
                employee_id: employee_id.to_string(),
            });
        }

        let entries = self.ledger.entries_in_range(employee_id, start, end);
        let report = aggregate_hours(employee_id, start, end, entries);

        debug!(
            employee_id,
            %start,
            %end,
            days = report.days.len(),
            total_minutes = report.total_minutes,
            flagged = report.flagged_dates.len(),
            "Computed hours worked"
        );

        Ok(report)
    }

    /// Computes gross salary over `[start, end]` as total hours times the
    /// hourly rate.
    ///
    /// Requires the employee in both the directory and the ledger.
    pub fn gross_salary(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<GrossSalaryReport> {
        let employee = self.directory.lookup(employee_id)?;
        let hours = self.hours_worked(employee_id, start, end)?;

        let gross_salary = hours.total_hours * employee.hourly_rate;

        debug!(
            employee_id,
            total_hours = %hours.total_hours,
            hourly_rate = %employee.hourly_rate,
            gross_salary = %gross_salary,
            "Computed gross salary"
        );

        Ok(GrossSalaryReport {
            employee_id: employee.id.clone(),
            full_name: employee.full_name(),
            start_date: start,
            end_date: end,
            total_hours: hours.total_hours,
            hourly_rate: employee.hourly_rate,
            gross_salary,
            flagged_dates: hours.flagged_dates,
        })
    }

    /// Runs the deduction pipeline on the employee's basic salary.
    ///
    /// Requires the employee in the directory only.
    pub fn net_salary(&self, employee_id: &str) -> PayrollResult<NetSalaryReport> {
        let employee = self.directory.lookup(employee_id)?;
        let breakdown = compute_net_salary(employee.basic_salary);

        debug!(
            employee_id,
            basic_salary = %breakdown.basic_salary,
            net_salary = %breakdown.net_salary,
            "Computed net salary"
        );

        Ok(NetSalaryReport {
            employee_id: employee.id.clone(),
            full_name: employee.full_name(),
            breakdown,
        })
    }
}
