//! Core data models for the payroll engine.
//!
//! This module contains the domain records loaded from the data sources and
//! the structured results returned by payroll queries.

mod attendance;
mod employee;
mod payroll_result;

pub use attendance::AttendanceEntry;
pub use employee::Employee;
pub use payroll_result::{
    AuditStep, DailyHours, GrossSalaryReport, HoursWorkedReport, NetSalaryBreakdown,
    NetSalaryReport, ShiftStatus,
};
