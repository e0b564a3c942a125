//! Integration tests for the payroll engine.
//!
//! This suite loads the sample data files shipped in `data/`, builds the
//! service, and exercises it through the HTTP router:
//! - Employee listing and lookup
//! - Hours worked over a date range, including a misordered day
//! - Gross salary
//! - Net salary breakdown
//! - Error cases (unknown ids, bad query strings)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::ingest::{load_attendance, load_employees};
use payroll_engine::service::PayrollService;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_service() -> PayrollService {
    let loader = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let config = loader.config();

    let employees = load_employees(&config.data.employees).expect("Failed to load employees");
    let attendance = load_attendance(&config.data.attendance).expect("Failed to load attendance");
    assert!(employees.rejected.is_empty(), "{:?}", employees.rejected);
    assert!(attendance.rejected.is_empty(), "{:?}", attendance.rejected);

    PayrollService::new(employees.data, attendance.data)
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(create_test_service()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field whether serialized as a string or a number.
fn decimal_at(json: &Value, pointer: &str) -> Decimal {
    match json.pointer(pointer) {
        Some(Value::String(s)) => decimal(s),
        Some(Value::Number(n)) => decimal(&n.to_string()),
        other => panic!("No decimal at {}: {:?}", pointer, other),
    }
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Ingestion
// =============================================================================

#[test]
fn test_sample_data_loads_cleanly() {
    let service = create_test_service();
    assert_eq!(service.directory().len(), 8);
    assert_eq!(service.ledger().employee_count(), 5);
    assert_eq!(service.ledger().entry_count(), 17);
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_list_employees_sorted() {
    let (status, json) = get(create_router_for_test(), "/employees").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 8);
    assert_eq!(json["employees"][0], "10001");
    assert_eq!(json["employees"][7], "10008");
}

#[tokio::test]
async fn test_employee_lookup() {
    let (status, json) = get(create_router_for_test(), "/employees/10001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["full_name"], "Manuel III Garcia");
    assert_eq!(json["birthday"], "1983-10-11");
    assert_eq!(decimal_at(&json, "/basic_salary"), decimal("90000"));
    assert_eq!(decimal_at(&json, "/hourly_rate"), decimal("535.71"));
}

#[tokio::test]
async fn test_employee_lookup_unknown_is_404() {
    let (status, json) = get(create_router_for_test(), "/employees/99999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Hours worked
// =============================================================================

#[tokio::test]
async fn test_hours_two_days() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/hours?start=06/03/2024&end=06/04/2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["days"].as_array().unwrap().len(), 2);
    assert_eq!(json["days"][0]["duration"], "9:32");
    assert_eq!(json["days"][1]["duration"], "9:20");
    assert_eq!(json["total_minutes"], 1132);
    assert_eq!(json["total_duration"], "18:52");
}

#[tokio::test]
async fn test_hours_whole_month() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/hours?start=06/01/2024&end=06/30/2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["days"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_minutes"], 2919);
    assert_eq!(json["total_duration"], "48:39");
    assert!(json["flagged_dates"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_hours_flags_clock_out_before_clock_in() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10002/hours?start=06/03/2024&end=06/07/2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["days"].as_array().unwrap().len(), 5);
    assert_eq!(json["days"][4]["status"], "negative_duration");
    assert_eq!(json["days"][4]["duration"], "Invalid");
    assert_eq!(json["days"][4]["minutes"], -540);
    assert_eq!(json["total_minutes"], 2147);
    assert_eq!(json["total_duration"], "35:47");
    assert_eq!(json["flagged_dates"][0], "2024-06-07");
}

#[tokio::test]
async fn test_hours_inverted_range_is_empty() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/hours?start=06/07/2024&end=06/03/2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["days"].as_array().unwrap().is_empty());
    assert_eq!(json["total_minutes"], 0);
    assert_eq!(json["total_duration"], "0:00");
}

#[tokio::test]
async fn test_hours_without_attendance_is_404() {
    // 10004 is in the directory but never clocked in.
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10004/hours?start=06/03/2024&end=06/07/2024",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "ATTENDANCE_NOT_FOUND");
}

#[tokio::test]
async fn test_hours_bad_date_is_400() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/hours?start=2024-06-03&end=06/07/2024",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("2024-06-03"));
}

#[tokio::test]
async fn test_hours_missing_query_is_400() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/hours?start=06/03/2024",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Gross salary
// =============================================================================

#[tokio::test]
async fn test_gross_salary_whole_hours() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10005/gross?start=06/03/2024&end=06/04/2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["full_name"], "Eduard Hernandez");
    assert_eq!(decimal_at(&json, "/total_hours"), decimal("18"));
    assert_eq!(decimal_at(&json, "/gross_salary"), decimal("5643.18"));
}

#[tokio::test]
async fn test_gross_salary_rounds_to_cents() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10001/gross?start=06/03/2024&end=06/04/2024",
    )
    .await;

    // 1132 minutes * 535.71 / 60 = 10107.062
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&json, "/gross_salary"), decimal("10107.06"));
}

#[tokio::test]
async fn test_gross_salary_excludes_flagged_day() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/10002/gross?start=06/03/2024&end=06/07/2024",
    )
    .await;

    // 2147 minutes * 357.14 / 60 = 12779.6596...
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&json, "/gross_salary"), decimal("12779.66"));
    assert_eq!(json["flagged_dates"][0], "2024-06-07");
}

#[tokio::test]
async fn test_gross_salary_unknown_employee_is_404() {
    let (status, json) = get(
        create_router_for_test(),
        "/employees/99999/gross?start=06/03/2024&end=06/07/2024",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Net salary
// =============================================================================

#[tokio::test]
async fn test_net_salary_top_bracket_employee() {
    let (status, json) = get(create_router_for_test(), "/employees/10001/net").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&json, "/breakdown/basic_salary"), decimal("90000"));
    assert_eq!(decimal_at(&json, "/breakdown/sss"), decimal("1125"));
    assert_eq!(decimal_at(&json, "/breakdown/philhealth"), decimal("900"));
    assert_eq!(decimal_at(&json, "/breakdown/pagibig"), decimal("1800"));
    assert_eq!(decimal_at(&json, "/breakdown/taxable_income"), decimal("86175"));
    assert_eq!(decimal_at(&json, "/breakdown/withholding_tax"), decimal("16685.40"));
    assert_eq!(decimal_at(&json, "/breakdown/net_salary"), decimal("69489.60"));
    assert_eq!(json["breakdown"]["audit"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_net_salary_below_tax_threshold() {
    let (status, json) = get(create_router_for_test(), "/employees/10008/net").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&json, "/breakdown/sss"), decimal("1012.50"));
    assert_eq!(decimal_at(&json, "/breakdown/taxable_income"), decimal("20700"));
    assert_eq!(decimal_at(&json, "/breakdown/withholding_tax"), decimal("0"));
    assert_eq!(decimal_at(&json, "/breakdown/net_salary"), decimal("20700"));
}

#[tokio::test]
async fn test_net_salary_needs_no_attendance() {
    let (status, _) = get(create_router_for_test(), "/employees/10004/net").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_net_salary_unknown_employee_is_404() {
    let (status, json) = get(create_router_for_test(), "/employees/99999/net").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
}
