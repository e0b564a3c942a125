//! Response types for the payroll API.
//!
//! This module defines the success bodies that are not plain domain reports,
//! the error response structure, and the mapping from [`PayrollError`] to
//! HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;
use crate::error::PayrollError;
use crate::models::Employee;

/// Body of `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// Number of employees.
    pub count: usize,
    /// Employee ids, ascending.
    pub employees: Vec<String>,
}

/// Body of `GET /employees/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Employee number.
    pub id: String,
    /// "First Last".
    pub full_name: String,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// Monthly basic salary, rounded to two decimal places.
    pub basic_salary: Decimal,
    /// Hourly rate, rounded to two decimal places.
    pub hourly_rate: Decimal,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            full_name: employee.full_name(),
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            birthday: employee.birthday,
            basic_salary: round_currency(employee.basic_salary),
            hourly_rate: round_currency(employee.hourly_rate),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with a `VALIDATION_ERROR` body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    message,
                    format!("No employee record has id '{}'", employee_id),
                ),
            },
            PayrollError::AttendanceNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ATTENDANCE_NOT_FOUND",
                    message,
                    format!("No attendance records exist for '{}'", employee_id),
                ),
            },
            PayrollError::InvalidDate { .. }
            | PayrollError::InvalidTime { .. }
            | PayrollError::InvalidAmount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            PayrollError::NegativeDuration { .. }
            | PayrollError::MalformedRecord { .. }
            | PayrollError::DataSourceNotFound { .. }
            | PayrollError::DataSourceError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("DATA_ERROR", message),
            },
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", message),
                }
            }
            PayrollError::Io { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("IO_ERROR", message),
            },
        }
    }
}
