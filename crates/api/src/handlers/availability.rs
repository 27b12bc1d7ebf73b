//! # Availability Handlers
//!
//! CRUD over a doctor's weekly availability windows. Windows of the same
//! doctor may not overlap on the same day.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use carnet_core::{
    errors::{CarnetError, CarnetResult},
    models::availability::{
        Availability, AvailabilityWindow, CreateAvailabilityRequest, DayOfWeek,
        UpdateAvailabilityRequest,
    },
    time::{format_hhmm, parse_hhmm},
};
use carnet_db::{models::DbAvailability, repositories::availability as repo};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Restrict the listing to one weekday
    pub jour: Option<DayOfWeek>,
}

pub fn parse_window(day: DayOfWeek, heure_debut: &str, heure_fin: &str) -> CarnetResult<AvailabilityWindow> {
    AvailabilityWindow::new(day, parse_hhmm(heure_debut)?, parse_hhmm(heure_fin)?)
}

/// Fails with `Conflict` if `window` intersects one of `existing`, skipping
/// the row being replaced when updating.
pub fn ensure_no_overlap(
    existing: &[DbAvailability],
    window: &AvailabilityWindow,
    replacing: Option<Uuid>,
) -> CarnetResult<()> {
    for row in existing.iter().filter(|row| Some(row.id) != replacing) {
        if row.to_window()?.intersects(window) {
            return Err(CarnetError::Conflict(format!(
                "Availability overlaps existing window {} {}-{}",
                row.jour,
                format_hhmm(row.debut_minutes),
                format_hhmm(row.fin_minutes)
            )));
        }
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_availability(
    State(state): State<Arc<ApiState>>,
    Path(medecin_id): Path<Uuid>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<Availability>), AppError> {
    let window = parse_window(payload.jour, &payload.heure_debut, &payload.heure_fin)?;

    let existing = repo::list_availabilities(&state.db_pool, medecin_id, Some(window.day)).await?;
    ensure_no_overlap(&existing, &window, None)?;

    let created = repo::create_availability(&state.db_pool, medecin_id, &window).await?;

    Ok((StatusCode::CREATED, Json(created.into_availability()?)))
}

#[axum::debug_handler]
pub async fn list_availabilities(
    State(state): State<Arc<ApiState>>,
    Path(medecin_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<Availability>>, AppError> {
    let rows = repo::list_availabilities(&state.db_pool, medecin_id, query.jour).await?;

    let availabilities = rows
        .into_iter()
        .map(DbAvailability::into_availability)
        .collect::<CarnetResult<Vec<_>>>()?;

    Ok(Json(availabilities))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<Availability>, AppError> {
    let current = repo::get_availability_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| CarnetError::NotFound(format!("Availability with ID {} not found", id)))?;
    let current_window = current.to_window()?;

    let day = payload.jour.unwrap_or(current_window.day);
    let start = match &payload.heure_debut {
        Some(value) => parse_hhmm(value)?,
        None => current_window.start,
    };
    let end = match &payload.heure_fin {
        Some(value) => parse_hhmm(value)?,
        None => current_window.end,
    };
    let window = AvailabilityWindow::new(day, start, end)?;

    let existing = repo::list_availabilities(&state.db_pool, current.medecin_id, Some(day)).await?;
    ensure_no_overlap(&existing, &window, Some(id))?;

    let updated = repo::update_availability(&state.db_pool, id, &window).await?;

    Ok(Json(updated.into_availability()?))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repo::delete_availability(&state.db_pool, id).await? {
        return Err(AppError(CarnetError::NotFound(format!(
            "Availability with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
