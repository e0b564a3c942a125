//! Attendance entry model.
//!
//! This module defines the AttendanceEntry struct representing one day's
//! clock-in and clock-out for an employee.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calculation::elapsed_minutes;

/// A single day of attendance for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Clock-in time of day.
    pub clock_in: NaiveTime,
    /// Clock-out time of day.
    pub clock_out: NaiveTime,
}

impl AttendanceEntry {
    /// Returns the minutes between clock-in and clock-out.
    ///
    /// The result is negative when clock-out precedes clock-in; there is no
    /// overnight wraparound.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let entry = AttendanceEntry {
    ///     employee_id: "10001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     clock_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    /// };
    /// assert_eq!(entry.elapsed_minutes(), 540);
    /// ```
    pub fn elapsed_minutes(&self) -> i64 {
        elapsed_minutes(self.clock_in, self.clock_out)
    }

    /// Returns true if clock-out is not before clock-in.
    pub fn is_valid_shift(&self) -> bool {
        self.elapsed_minutes() >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(clock_in: &str, clock_out: &str) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            clock_in: NaiveTime::parse_from_str(clock_in, "%H:%M").unwrap(),
            clock_out: NaiveTime::parse_from_str(clock_out, "%H:%M").unwrap(),
        }
    }

    #[test]
    fn test_full_day_entry() {
        let entry = make_entry("08:00", "17:00");
        assert_eq!(entry.elapsed_minutes(), 540);
        assert!(entry.is_valid_shift());
    }

    #[test]
    fn test_zero_duration_entry_is_valid() {
        let entry = make_entry("09:00", "09:00");
        assert_eq!(entry.elapsed_minutes(), 0);
        assert!(entry.is_valid_shift());
    }

    #[test]
    fn test_misordered_entry_is_invalid() {
        let entry = make_entry("09:00", "08:00");
        assert_eq!(entry.elapsed_minutes(), -60);
        assert!(!entry.is_valid_shift());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = make_entry("08:59", "18:31");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"date\":\"2024-06-03\""));
        assert!(json.contains("\"clock_in\":\"08:59:00\""));

        let deserialized: AttendanceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
