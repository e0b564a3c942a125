//! Employee directory.
//!
//! An immutable lookup of employee id to [`Employee`], built once by
//! ingestion and then only read.

use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Lookup of employees by id.
///
/// # Example
///
/// ```
/// use payroll_engine::directory::EmployeeDirectory;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let directory: EmployeeDirectory = vec![Employee {
///     id: "10001".to_string(),
///     last_name: "Garcia".to_string(),
///     first_name: "Manuel III".to_string(),
///     birthday: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
///     basic_salary: Decimal::new(90000, 0),
///     hourly_rate: Decimal::new(53571, 2),
/// }]
/// .into_iter()
/// .collect();
///
/// assert!(directory.lookup("10001").is_ok());
/// assert!(directory.lookup("99999").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: HashMap<String, Employee>,
}

impl EmployeeDirectory {
    /// Creates a directory from a list of employees.
    ///
    /// If two employees share an id, the later one wins.
    pub fn new(employees: Vec<Employee>) -> Self {
        employees.into_iter().collect()
    }

    /// Looks up an employee by id.
    ///
    /// Returns `EmployeeNotFound` if the id is unknown.
    pub fn lookup(&self, employee_id: &str) -> PayrollResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns true if the id is present.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.employees.contains_key(employee_id)
    }

    /// Returns all employee ids in ascending order.
    pub fn employee_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.employees.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for EmployeeDirectory {
    fn from_iter<T: IntoIterator<Item = Employee>>(iter: T) -> Self {
        Self {
            employees: iter.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }
}
