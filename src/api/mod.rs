//! HTTP API module for the payroll engine.
//!
//! This module provides read-only REST endpoints over a loaded
//! [`PayrollService`](crate::service::PayrollService): employee listing and
//! lookup, hours worked and gross salary over a date range, and the net
//! salary breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DateRangeQuery;
pub use response::{ApiError, ApiErrorResponse, EmployeeListResponse, EmployeeResponse};
pub use state::AppState;
