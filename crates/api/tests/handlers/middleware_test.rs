use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use carnet_api::middleware::error_handling::{map_error, AppError};
use carnet_core::errors::CarnetError;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case::not_found(CarnetError::NotFound("Availability not found".to_string()), StatusCode::NOT_FOUND)]
#[case::validation(CarnetError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case::invalid_argument(CarnetError::InvalidArgument("Slot length".to_string()), StatusCode::BAD_REQUEST)]
#[case::conflict(CarnetError::Conflict("Already booked".to_string()), StatusCode::CONFLICT)]
#[case::database(CarnetError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: CarnetError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_carries_message() {
    let response = AppError(CarnetError::Conflict("Slot already booked".to_string())).into_response();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Conflict: Slot already booked");
}

#[tokio::test]
async fn test_eyre_report_becomes_database_error() {
    let error: AppError = eyre::eyre!("pool closed").into();

    assert!(matches!(error.0, CarnetError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
