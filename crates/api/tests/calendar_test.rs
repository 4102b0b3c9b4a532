mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc, Weekday};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::collections::HashSet;

use expertbook_api::handlers::calendar::NO_TIMES_MESSAGE;
use expertbook_client::gateway::ClientError;
use expertbook_core::models::appointment::{Appointment, AppointmentStatus};
use expertbook_core::models::expert::Expert;
use expertbook_core::schedule::hours::BusinessHours;

use common::{expert_email, TestContext};

fn all_week() -> HashSet<Weekday> {
    HashSet::from([
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ])
}

fn decode_error() -> ClientError {
    ClientError::from(serde_json::from_str::<Value>("not json").unwrap_err())
}

#[tokio::test]
async fn test_calendar_unknown_expert_is_404() {
    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(|_| Ok(None));

    let server = ctx.server();
    let response = server
        .get("/api/experts/nobody@example.com/calendar")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Expert not found"));
}

#[tokio::test]
async fn test_calendar_rejects_out_of_range_month() {
    // Month validation runs before any collaborator call, so no
    // expectations are needed.
    let server = TestContext::new().server();

    let response = server
        .get("/api/experts/sofia@example.com/calendar")
        .add_query_param("year", 2025)
        .add_query_param("month", 13)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn test_calendar_grid_shape_and_today_available() {
    let email = expert_email();
    let expert = Expert::new(email.clone(), all_week());

    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(move |_| Ok(Some(expert.clone())));
    ctx.directory
        .expect_get_appointments()
        .returning(|_| Ok(Vec::new()));

    let server = ctx.server();
    let response = server.get(&format!("/api/experts/{email}/calendar")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["expert"], Value::String(email));

    let weeks = body["grid"]["weeks"].as_array().expect("weeks array");
    assert_eq!(weeks.len(), 6);
    assert!(weeks.iter().all(|week| week.as_array().unwrap().len() == 7));

    // With a seven-day pattern and no appointments, today itself must be
    // selectable.
    let today = Utc::now().date_naive().to_string();
    let today_cell = weeks
        .iter()
        .flat_map(|week| week.as_array().unwrap())
        .find(|cell| cell["date"] == Value::String(today.clone()))
        .expect("today is in the current month grid");
    assert_eq!(today_cell["status"], "available");
    assert_eq!(today_cell["selectable"], Value::Bool(true));
}

#[tokio::test]
async fn test_calendar_navigation_wraps_year() {
    let email = expert_email();
    let expert = Expert::new(email.clone(), all_week());

    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(move |_| Ok(Some(expert.clone())));
    ctx.directory
        .expect_get_appointments()
        .returning(|_| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get(&format!("/api/experts/{email}/calendar"))
        .add_query_param("year", 2030)
        .add_query_param("month", 12)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["prev"], serde_json::json!({ "year": 2030, "month": 11 }));
    assert_eq!(body["next"], serde_json::json!({ "year": 2031, "month": 1 }));
}

#[tokio::test]
async fn test_slots_exclude_booked_time() {
    let email = expert_email();
    let expert = Expert::new(email.clone(), all_week());
    let day = Utc::now().date_naive() + Duration::days(14);
    let booked = Appointment::new(
        day.and_hms_opt(9, 0, 0).unwrap().and_utc(),
        AppointmentStatus::Confirmed,
    );

    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(move |_| Ok(Some(expert.clone())));
    ctx.directory
        .expect_get_appointments()
        .returning(move |_| Ok(vec![booked.clone()]));

    let server = ctx.server();
    let response = server
        .get(&format!("/api/experts/{email}/slots"))
        .add_query_param("date", day.to_string())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let times: Vec<&str> = body["times"]
        .as_array()
        .expect("times array")
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();

    assert!(!times.contains(&"09:00"));
    assert!(times.contains(&"08:00"));
    assert!(times.contains(&"10:00"));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_empty_day_carries_explicit_message() {
    let email = expert_email();
    let expert = Expert::new(email.clone(), all_week());
    let day = Utc::now().date_naive() + Duration::days(14);

    // Every candidate time of the default universe is taken.
    let appointments: Vec<Appointment> = BusinessHours::default()
        .times()
        .iter()
        .map(|time| {
            Appointment::new(day.and_time(*time).and_utc(), AppointmentStatus::Confirmed)
        })
        .collect();

    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(move |_| Ok(Some(expert.clone())));
    ctx.directory
        .expect_get_appointments()
        .returning(move |_| Ok(appointments.clone()));

    let server = ctx.server();
    let response = server
        .get(&format!("/api/experts/{email}/slots"))
        .add_query_param("date", day.to_string())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["times"].as_array().unwrap().len(), 0);
    assert_eq!(body["message"], Value::String(NO_TIMES_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_collaborator_failure_maps_to_bad_gateway() {
    let email = expert_email();
    let expert = Expert::new(email.clone(), all_week());

    let mut ctx = TestContext::new();
    ctx.directory
        .expect_get_expert()
        .returning(move |_| Ok(Some(expert.clone())));
    ctx.directory
        .expect_get_appointments()
        .returning(|_| Err(decode_error()));

    let server = ctx.server();
    let response = server.get(&format!("/api/experts/{email}/calendar")).await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}
