//! Requests that are answered before any database access.

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_and_version() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));

    let response = server.get("/version").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "carnet-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_slots_with_zero_length_is_bad_request() {
    let server = TestContext::new().server();

    let response = server
        .get(&format!("/api/medecins/{}/creneaux", Uuid::new_v4()))
        .add_query_param("date", "2024-03-18")
        .add_query_param("duree", 0)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid argument"));
}

#[tokio::test]
async fn test_slots_with_negative_length_is_bad_request() {
    let server = TestContext::new().server();

    let response = server
        .get(&format!("/api/medecins/{}/creneaux", Uuid::new_v4()))
        .add_query_param("date", "2024-03-18")
        .add_query_param("duree", -30)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slots_require_a_valid_date() {
    let server = TestContext::new().server();
    let path = format!("/api/medecins/{}/creneaux", Uuid::new_v4());

    let missing = server.get(&path).await;
    missing.assert_status(StatusCode::BAD_REQUEST);

    let invalid = server.get(&path).add_query_param("date", "2024-13-45").await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_doctor_id_is_bad_request() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/medecins/not-a-uuid/creneaux")
        .add_query_param("date", "2024-03-18")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_availability_with_inverted_range() {
    let server = TestContext::new().server();

    let response = server
        .post(&format!("/api/medecins/{}/disponibilites", Uuid::new_v4()))
        .json(&json!({ "jour": "lundi", "heureDebut": "12:00", "heureFin": "09:00" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_create_availability_with_unknown_day() {
    let server = TestContext::new().server();

    let response = server
        .post(&format!("/api/medecins/{}/disponibilites", Uuid::new_v4()))
        .json(&json!({ "jour": "monday", "heureDebut": "09:00", "heureFin": "12:00" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_appointment_with_zero_duration() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/rendez-vous")
        .json(&json!({
            "medecinId": Uuid::new_v4(),
            "patientId": Uuid::new_v4(),
            "date": "2024-03-18",
            "heure": "09:00",
            "duree": 0,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_appointment_with_malformed_time() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/rendez-vous")
        .json(&json!({
            "medecinId": Uuid::new_v4(),
            "patientId": Uuid::new_v4(),
            "date": "2024-03-18",
            "heure": "9h",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
