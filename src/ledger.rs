//! Attendance ledger.
//!
//! Per-employee attendance, keyed by date. Dates are unique per employee and
//! kept in ascending order so range queries come back sorted.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveTime};

use crate::models::AttendanceEntry;

/// Attendance entries indexed by employee id, then by date.
#[derive(Debug, Clone, Default)]
pub struct AttendanceLedger {
    entries: HashMap<String, BTreeMap<NaiveDate, AttendanceEntry>>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry, replacing any existing entry for the same employee
    /// and date.
    pub fn record(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
    ) {
        self.insert(AttendanceEntry {
            employee_id: employee_id.to_string(),
            date,
            clock_in,
            clock_out,
        });
    }

    /// Records an already-built entry. Same overwrite rule as [`record`](Self::record).
    pub fn insert(&mut self, entry: AttendanceEntry) {
        self.entries
            .entry(entry.employee_id.clone())
            .or_default()
            .insert(entry.date, entry);
    }

    /// Returns the entries of an employee dated within `[start, end]`,
    /// ascending by date.
    ///
    /// An unknown employee or an inverted range (`start > end`) yields an
    /// empty list. Callers that need to tell "unknown employee" apart use
    /// [`contains_employee`](Self::contains_employee).
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::ledger::AttendanceLedger;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    /// let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
    ///
    /// let mut ledger = AttendanceLedger::new();
    /// ledger.record("10001", date(1), time(8), time(17));
    /// ledger.record("10001", date(3), time(9), time(17));
    ///
    /// assert_eq!(ledger.entries_in_range("10001", date(1), date(2)).len(), 1);
    /// assert_eq!(ledger.entries_in_range("10001", date(1), date(3)).len(), 2);
    /// assert!(ledger.entries_in_range("10001", date(3), date(1)).is_empty());
    /// ```
    pub fn entries_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&AttendanceEntry> {
        if start > end {
            return Vec::new();
        }

        self.entries
            .get(employee_id)
            .map(|by_date| by_date.range(start..=end).map(|(_, e)| e).collect())
            .unwrap_or_default()
    }

    /// Returns true if the employee has at least one entry.
    pub fn contains_employee(&self, employee_id: &str) -> bool {
        self.entries.contains_key(employee_id)
    }

    /// Returns the number of employees with attendance.
    pub fn employee_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total number of entries across all employees.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn sample_ledger() -> AttendanceLedger {
        let mut ledger = AttendanceLedger::new();
        ledger.record("10001", make_date(1, 3), make_time(9, 0), make_time(17, 0));
        ledger.record("10001", make_date(1, 1), make_time(8, 0), make_time(17, 0));
        ledger.record("10002", make_date(1, 2), make_time(8, 30), make_time(17, 30));
        ledger
    }

    #[test]
    fn test_range_is_closed_on_both_ends() {
        let ledger = sample_ledger();
        let entries = ledger.entries_in_range("10001", make_date(1, 1), make_date(1, 3));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, make_date(1, 1));
        assert_eq!(entries[1].date, make_date(1, 3));
    }

    #[test]
    fn test_range_excludes_dates_outside() {
        let ledger = sample_ledger();
        let entries = ledger.entries_in_range("10001", make_date(1, 1), make_date(1, 2));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].elapsed_minutes(), 540);
    }

    #[test]
    fn test_single_day_range() {
        let ledger = sample_ledger();
        let entries = ledger.entries_in_range("10001", make_date(1, 3), make_date(1, 3));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_results_ascend_regardless_of_insert_order() {
        let ledger = sample_ledger();
        let dates: Vec<NaiveDate> = ledger
            .entries_in_range("10001", make_date(1, 1), make_date(12, 31))
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec![make_date(1, 1), make_date(1, 3)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let ledger = sample_ledger();
        assert!(
            ledger
                .entries_in_range("10001", make_date(1, 3), make_date(1, 1))
                .is_empty()
        );
    }

    #[test]
    fn test_unknown_employee_is_empty_not_error() {
        let ledger = sample_ledger();
        assert!(
            ledger
                .entries_in_range("99999", make_date(1, 1), make_date(1, 31))
                .is_empty()
        );
        assert!(!ledger.contains_employee("99999"));
    }

    #[test]
    fn test_record_overwrites_same_date() {
        let mut ledger = sample_ledger();
        ledger.record("10001", make_date(1, 1), make_time(10, 0), make_time(12, 0));

        let entries = ledger.entries_in_range("10001", make_date(1, 1), make_date(1, 1));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].clock_in, make_time(10, 0));
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn test_counts() {
        let ledger = sample_ledger();
        assert_eq!(ledger.employee_count(), 2);
        assert_eq!(ledger.entry_count(), 3);
    }
}
