//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every recoverable condition: unknown employees, malformed input
//! records, misordered clock times, and data or configuration files that
//! cannot be read.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     employee_id: "10099".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: 10099");
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee id is not present in the employee directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: String,
    },

    /// The employee id has no records in the attendance ledger.
    #[error("Employee not found in attendance records: {employee_id}")]
    AttendanceNotFound {
        /// The id that was looked up.
        employee_id: String,
    },

    /// A date value could not be parsed as MM/DD/YYYY.
    #[error("Invalid date '{value}': expected MM/DD/YYYY")]
    InvalidDate {
        /// The offending input.
        value: String,
    },

    /// A time-of-day value could not be parsed as HH:MM.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The offending input.
        value: String,
    },

    /// A monetary field was unparseable or negative.
    #[error("Invalid amount for '{field}': {value}")]
    InvalidAmount {
        /// The field name.
        field: String,
        /// The offending input.
        value: String,
    },

    /// A record in a data source could not be turned into a domain value.
    #[error("Malformed record in {source_name} at line {line}: {message}")]
    MalformedRecord {
        /// Name of the data source (usually a file path).
        source_name: String,
        /// The 1-based line number of the record.
        line: u64,
        /// What was wrong with the record.
        message: String,
    },

    /// Clock-out precedes clock-in for an attendance entry.
    #[error(
        "Negative duration for employee {employee_id} on {date}: clock-out {clock_out} is before clock-in {clock_in}"
    )]
    NegativeDuration {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The date of the entry.
        date: NaiveDate,
        /// The recorded clock-in time.
        clock_in: NaiveTime,
        /// The recorded clock-out time.
        clock_out: NaiveTime,
    },

    /// A data file could not be found or opened.
    #[error("Data source not found: {path}")]
    DataSourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data file was found but could not be read as CSV.
    #[error("Failed to read data source '{path}': {message}")]
    DataSourceError {
        /// The path being read.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// An I/O operation outside the data sources failed.
    #[error("I/O error while {context}: {message}")]
    Io {
        /// What was being done, e.g. "binding 127.0.0.1:3000".
        context: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns true for the "employee is unknown" family of errors.
    ///
    /// These are expected outcomes of a query rather than defects in the data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PayrollError::EmployeeNotFound { .. } | PayrollError::AttendanceNotFound { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = PayrollError::EmployeeNotFound {
            employee_id: "10099".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: 10099");
    }

    #[test]
    fn test_attendance_not_found_displays_id() {
        let error = PayrollError::AttendanceNotFound {
            employee_id: "10001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee not found in attendance records: 10001"
        );
    }

    #[test]
    fn test_invalid_date_displays_expected_format() {
        let error = PayrollError::InvalidDate {
            value: "2024-13-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2024-13-01': expected MM/DD/YYYY"
        );
    }

    #[test]
    fn test_malformed_record_displays_source_and_line() {
        let error = PayrollError::MalformedRecord {
            source_name: "employees.csv".to_string(),
            line: 7,
            message: "expected at least 19 columns, found 4".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed record in employees.csv at line 7: expected at least 19 columns, found 4"
        );
    }

    #[test]
    fn test_negative_duration_displays_times() {
        let error = PayrollError::NegativeDuration {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            clock_out: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Negative duration for employee 10001 on 2024-06-03: clock-out 08:00:00 is before clock-in 09:00:00"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_displays_context() {
        let error = PayrollError::Io {
            context: "binding 127.0.0.1:3000".to_string(),
            message: "address in use".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "I/O error while binding 127.0.0.1:3000: address in use"
        );
    }

    #[test]
    fn test_is_not_found_only_for_lookup_errors() {
        assert!(
            PayrollError::EmployeeNotFound {
                employee_id: "x".to_string()
            }
            .is_not_found()
        );
        assert!(
            PayrollError::AttendanceNotFound {
                employee_id: "x".to_string()
            }
            .is_not_found()
        );
        assert!(
            !PayrollError::InvalidTime {
                value: "25:00".to_string()
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::EmployeeNotFound {
                employee_id: "10099".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
