//! CSV ingestion for employee and attendance data.
//!
//! This module reads the two delimited data sources into an
//! [`EmployeeDirectory`] and an [`AttendanceLedger`]. A record that cannot be
//! turned into a domain value is skipped, logged, and returned in
//! [`LoadOutcome::rejected`]; it never aborts the rest of the load. A failure
//! to read the underlying source does abort it, as `DataSourceError`.
//!
//! # Layout
//!
//! Both files start with a header row. Columns are positional:
//!
//! ```text
//! employees:  0 id, 1 last name, 2 first name, 3 birthday (MM/DD/YYYY),
//!             13 basic salary, 18 hourly rate   (at least 19 columns)
//! attendance: 0 employee id, 1 last name, 2 first name, 3 date (MM/DD/YYYY),
//!             4 log in (HH:MM), 5 log out (HH:MM)   (at least 6 columns)
//! ```
//!
//! Amount cells may be quoted and contain thousands separators (`"90,000"`).

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{parse_date, parse_time};
use crate::directory::EmployeeDirectory;
use crate::error::{PayrollError, PayrollResult};
use crate::ledger::AttendanceLedger;
use crate::models::{AttendanceEntry, Employee};

const EMPLOYEE_ID_COLUMN: usize = 0;
const EMPLOYEE_LAST_NAME_COLUMN: usize = 1;
const EMPLOYEE_FIRST_NAME_COLUMN: usize = 2;
const EMPLOYEE_BIRTHDAY_COLUMN: usize = 3;
const EMPLOYEE_BASIC_SALARY_COLUMN: usize = 13;
const EMPLOYEE_HOURLY_RATE_COLUMN: usize = 18;
const EMPLOYEE_MIN_COLUMNS: usize = 19;

const ATTENDANCE_ID_COLUMN: usize = 0;
const ATTENDANCE_DATE_COLUMN: usize = 3;
const ATTENDANCE_LOG_IN_COLUMN: usize = 4;
const ATTENDANCE_LOG_OUT_COLUMN: usize = 5;
const ATTENDANCE_MIN_COLUMNS: usize = 6;

/// The result of loading a data source.
#[derive(Debug)]
pub struct LoadOutcome<T> {
    /// The structure built from the accepted records.
    pub data: T,
    /// Number of records accepted.
    pub accepted: usize,
    /// One `MalformedRecord` error per skipped record.
    pub rejected: Vec<PayrollError>,
}

/// Parses a monetary cell, stripping quotes and thousands separators.
///
/// Negative amounts are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::ingest::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("basic_salary", "\"90,000\"").unwrap(), Decimal::new(90000, 0));
/// assert!(parse_amount("basic_salary", "-1").is_err());
/// assert!(parse_amount("basic_salary", "N/A").is_err());
/// ```
pub fn parse_amount(field: &str, value: &str) -> PayrollResult<Decimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '"')
        .collect();

    let invalid = || PayrollError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    };

    let amount = Decimal::from_str(&cleaned).map_err(|_| invalid())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }
    Ok(amount)
}

/// Loads the employee directory from a CSV file.
pub fn load_employees<P: AsRef<Path>>(path: P) -> PayrollResult<LoadOutcome<EmployeeDirectory>> {
    let path = path.as_ref();
    let file = open_source(path)?;
    read_employees(file, &path.display().to_string())
}

/// Loads the attendance ledger from a CSV file.
pub fn load_attendance<P: AsRef<Path>>(path: P) -> PayrollResult<LoadOutcome<AttendanceLedger>> {
    let path = path.as_ref();
    let file = open_source(path)?;
    read_attendance(file, &path.display().to_string())
}

/// Reads employee records from any reader.
///
/// `source_name` is used in error messages and logs.
pub fn read_employees<R: Read>(
    reader: R,
    source_name: &str,
) -> PayrollResult<LoadOutcome<EmployeeDirectory>> {
    let mut employees = Vec::new();
    let rejected = read_records(reader, source_name, |record| {
        employees.push(employee_from_record(record)?);
        Ok(())
    })?;

    let accepted = employees.len();
    info!(
        source = source_name,
        accepted,
        rejected = rejected.len(),
        "Loaded employee records"
    );

    Ok(LoadOutcome {
        data: EmployeeDirectory::new(employees),
        accepted,
        rejected,
    })
}

/// Reads attendance records from any reader.
///
/// `source_name` is used in error messages and logs.
pub fn read_attendance<R: Read>(
    reader: R,
    source_name: &str,
) -> PayrollResult<LoadOutcome<AttendanceLedger>> {
    let mut ledger = AttendanceLedger::new();
    let mut accepted = 0;
    let rejected = read_records(reader, source_name, |record| {
        ledger.insert(attendance_from_record(record)?);
        accepted += 1;
        Ok(())
    })?;

    info!(
        source = source_name,
        accepted,
        rejected = rejected.len(),
        employees = ledger.employee_count(),
        "Loaded attendance records"
    );

    Ok(LoadOutcome {
        data: ledger,
        accepted,
        rejected,
    })
}

fn open_source(path: &Path) -> PayrollResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PayrollError::DataSourceNotFound {
            path: path.display().to_string(),
        },
        _ => PayrollError::DataSourceError {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}

/// Feeds every data row to `accept`, collecting the rows it rejects.
///
/// A read failure aborts the load with `DataSourceError`; only records that
/// were read but could not be used are collected.
fn read_records<R, F>(
    reader: R,
    source_name: &str,
    mut accept: F,
) -> PayrollResult<Vec<PayrollError>>
where
    R: Read,
    F: FnMut(&StringRecord) -> PayrollResult<()>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rejected = Vec::new();

    for result in csv_reader.records() {
        let outcome = match result {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                accept(&record).map_err(|e| (line, record_message(e)))
            }
            Err(e) if e.is_io_error() => {
                return Err(PayrollError::DataSourceError {
                    path: source_name.to_string(),
                    message: e.to_string(),
                });
            }
            Err(e) => Err((e.position().map_or(0, |p| p.line()), e.to_string())),
        };

        if let Err((line, message)) = outcome {
            warn!(source = source_name, line, error = %message, "Skipping malformed record");
            rejected.push(PayrollError::MalformedRecord {
                source_name: source_name.to_string(),
                line,
                message,
            });
        }
    }

    Ok(rejected)
}

/// Field-level problems carry no position of their own; only the message
/// survives into the rejected record.
fn record_message(error: PayrollError) -> String {
    match error {
        PayrollError::MalformedRecord { message, .. } => message,
        other => other.to_string(),
    }
}

fn required_columns(record: &StringRecord, min_columns: usize) -> PayrollResult<()> {
    if record.len() < min_columns {
        return Err(PayrollError::MalformedRecord {
            source_name: String::new(),
            line: 0,
            message: format!(
                "expected at least {} columns, found {}",
                min_columns,
                record.len()
            ),
        });
    }
    Ok(())
}

fn required_field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &str,
) -> PayrollResult<&'r str> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PayrollError::MalformedRecord {
            source_name: String::new(),
            line: 0,
            message: format!("missing {}", name),
        }),
    }
}

fn employee_from_record(record: &StringRecord) -> PayrollResult<Employee> {
    required_columns(record, EMPLOYEE_MIN_COLUMNS)?;

    Ok(Employee {
        id: required_field(record, EMPLOYEE_ID_COLUMN, "employee id")?.to_string(),
        last_name: required_field(record, EMPLOYEE_LAST_NAME_COLUMN, "last name")?.to_string(),
        first_name: required_field(record, EMPLOYEE_FIRST_NAME_COLUMN, "first name")?.to_string(),
        birthday: parse_date(required_field(record, EMPLOYEE_BIRTHDAY_COLUMN, "birthday")?)?,
        basic_salary: parse_amount(
            "basic_salary",
            required_field(record, EMPLOYEE_BASIC_SALARY_COLUMN, "basic salary")?,
        )?,
        hourly_rate: parse_amount(
            "hourly_rate",
            required_field(record, EMPLOYEE_HOURLY_RATE_COLUMN, "hourly rate")?,
        )?,
    })
}

fn attendance_from_record(record: &StringRecord) -> PayrollResult<AttendanceEntry> {
    required_columns(record, ATTENDANCE_MIN_COLUMNS)?;

    Ok(AttendanceEntry {
        employee_id: required_field(record, ATTENDANCE_ID_COLUMN, "employee id")?.to_string(),
        date: parse_date(required_field(record, ATTENDANCE_DATE_COLUMN, "date")?)?,
        clock_in: parse_time(required_field(record, ATTENDANCE_LOG_IN_COLUMN, "log in")?)?,
        clock_out: parse_time(required_field(record, ATTENDANCE_LOG_OUT_COLUMN, "log out")?)?,
    })
}
