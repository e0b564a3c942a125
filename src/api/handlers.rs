//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollResult;

use super::request::DateRangeQuery;
use super::response::{ApiErrorResponse, EmployeeListResponse, EmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(employee_handler))
        .route("/employees/:id/hours", get(hours_handler))
        .route("/employees/:id/gross", get(gross_handler))
        .route("/employees/:id/net", get(net_handler))
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let employees: Vec<String> = state
        .service()
        .employee_ids()
        .into_iter()
        .map(str::to_string)
        .collect();

    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Listed employees"
    );

    json_response(EmployeeListResponse {
        count: employees.len(),
        employees,
    })
}

/// Handler for GET /employees/:id.
async fn employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee lookup"
    );

    let result = state
        .service()
        .employee_info(&employee_id)
        .map(EmployeeResponse::from);
    respond(correlation_id, "employee lookup", result)
}

/// Handler for GET /employees/:id/hours.
///
/// Days whose clock-out precedes clock-in are listed with status
/// `negative_duration` and left out of the totals.
async fn hours_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing hours request"
    );

    let Query(range) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = range.parse().and_then(|(start, end)| {
        state.service().hours_worked(&employee_id, start, end)
    });

    if let Ok(report) = &result {
        if report.has_flagged_days() {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                flagged = ?report.flagged_dates,
                "Attendance has clock-out before clock-in"
            );
        }
        info!(
            correlation_id = %correlation_id,
            total_minutes = report.total_minutes,
            duration_us = start_time.elapsed().as_micros(),
            "Hours computed"
        );
    }

    respond(correlation_id, "hours", result)
}

/// Handler for GET /employees/:id/gross.
async fn gross_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing gross salary request"
    );

    let Query(range) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let result = range
        .parse()
        .and_then(|(start, end)| state.service().gross_salary(&employee_id, start, end))
        .map(|report| report.rounded());

    if let Ok(report) = &result {
        info!(
            correlation_id = %correlation_id,
            gross_salary = %report.gross_salary,
            "Gross salary computed"
        );
    }

    respond(correlation_id, "gross salary", result)
}

/// Handler for GET /employees/:id/net.
async fn net_handler(State(state): State<AppState>, Path(employee_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing net salary request"
    );

    let result = state
        .service()
        .net_salary(&employee_id)
        .map(|report| report.rounded());

    if let Ok(report) = &result {
        info!(
            correlation_id = %correlation_id,
            net_salary = %report.breakdown.net_salary,
            "Net salary computed"
        );
    }

    respond(correlation_id, "net salary", result)
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a query result into a JSON response, logging failures.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    result: PayrollResult<T>,
) -> Response {
    match result {
        Ok(body) => json_response(body),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn query_rejected(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    ApiErrorResponse::bad_request(format!(
        "{} (expected ?start=MM/DD/YYYY&end=MM/DD/YYYY)",
        body_text
    ))
    .into_response()
}
