//! Time accounting for attendance entries.
//!
//! This module converts clock-in/clock-out pairs into elapsed minutes,
//! formats durations for display, and aggregates the entries of a date range
//! into an [`HoursWorkedReport`].
//!
//! A day whose clock-out precedes its clock-in is never summed into a total.
//! It is kept in the per-day breakdown with [`ShiftStatus::NegativeDuration`]
//! and its date is listed in the report's `flagged_dates`.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, DailyHours, HoursWorkedReport, ShiftStatus};

/// Date format used by attendance records and queries (e.g. `06/03/2024`).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Time-of-day format used by attendance records (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

/// Marker shown in place of a duration that is negative.
pub const INVALID_DURATION: &str = "Invalid";

const MINUTES_PER_HOUR: i64 = 60;

/// Parses a calendar date in MM/DD/YYYY form.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("06/03/2024").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
/// );
/// assert!(parse_date("2024-06-03").is_err());
/// ```
pub fn parse_date(value: &str) -> PayrollResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| PayrollError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a time of day in HH:MM form.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time("08:59").unwrap(), NaiveTime::from_hms_opt(8, 59, 0).unwrap());
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(value: &str) -> PayrollResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| PayrollError::InvalidTime {
        value: value.to_string(),
    })
}

/// Returns `clock_out - clock_in` in whole minutes.
///
/// There is no overnight wraparound: a clock-out earlier than the clock-in
/// yields a negative value, which callers treat as an invalid shift.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{elapsed_minutes, parse_time};
///
/// let minutes = elapsed_minutes(parse_time("09:00").unwrap(), parse_time("08:00").unwrap());
/// assert_eq!(minutes, -60);
/// ```
pub fn elapsed_minutes(clock_in: NaiveTime, clock_out: NaiveTime) -> i64 {
    (clock_out - clock_in).num_minutes()
}

/// Returns the elapsed minutes of an entry, or `NegativeDuration` if the
/// clock-out precedes the clock-in.
pub fn validated_minutes(entry: &AttendanceEntry) -> PayrollResult<i64> {
    let minutes = entry.elapsed_minutes();
    if minutes < 0 {
        return Err(PayrollError::NegativeDuration {
            employee_id: entry.employee_id.clone(),
            date: entry.date,
            clock_in: entry.clock_in,
            clock_out: entry.clock_out,
        });
    }
    Ok(minutes)
}

/// Formats minutes as "H:MM", or [`INVALID_DURATION`] when negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(540), "9:00");
/// assert_eq!(format_duration(1020), "17:00");
/// assert_eq!(format_duration(5), "0:05");
/// assert_eq!(format_duration(-60), "Invalid");
/// ```
pub fn format_duration(minutes: i64) -> String {
    if minutes < 0 {
        return INVALID_DURATION.to_string();
    }
    format!(
        "{}:{:02}",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

/// Converts minutes to fractional hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Builds the breakdown line for a single attendance entry.
pub fn summarize_day(entry: &AttendanceEntry) -> DailyHours {
    let minutes = entry.elapsed_minutes();
    let status = match validated_minutes(entry) {
        Ok(_) => ShiftStatus::Valid,
        Err(_) => ShiftStatus::NegativeDuration,
    };

    DailyHours {
        date: entry.date,
        clock_in: entry.clock_in,
        clock_out: entry.clock_out,
        minutes,
        duration: format_duration(minutes),
        status,
    }
}

/// Aggregates the entries of a date range into an hours report.
///
/// The entries are expected in ascending date order, as returned by
/// [`AttendanceLedger::entries_in_range`](crate::ledger::AttendanceLedger::entries_in_range).
/// Invalid days appear in `days` but not in the totals.
pub fn aggregate_hours<'a, I>(
    employee_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    entries: I,
) -> HoursWorkedReport
where
    I: IntoIterator<Item = &'a AttendanceEntry>,
{
    let days: Vec<DailyHours> = entries.into_iter().map(summarize_day).collect();

    let total_minutes: i64 = days
        .iter()
        .filter(|d| d.counts_toward_total())
        .map(|d| d.minutes)
        .sum();

    let flagged_dates: Vec<NaiveDate> = days
        .iter()
        .filter(|d| !d.counts_toward_total())
        .map(|d| d.date)
        .collect();

    HoursWorkedReport {
        employee_id: employee_id.to_string(),
        start_date,
        end_date,
        days,
        total_minutes,
        total_hours: minutes_to_hours(total_minutes),
        total_duration: format_duration(total_minutes),
        flagged_dates,
    }
}
