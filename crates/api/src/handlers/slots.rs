//! # Slot Handlers
//!
//! Serves the bookable slots of a doctor for a calendar date. The date is
//! resolved to a weekday, the doctor's windows for that weekday and the
//! non-cancelled appointments on that date are loaded, and the pure
//! generator in `carnet_core::slots` does the rest.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use carnet_core::{
    errors::{CarnetError, CarnetResult},
    models::{
        availability::DayOfWeek,
        slot::{Slot, SlotResponse},
    },
    slots::{generate_slots, validate_slot_length},
};
use carnet_db::repositories::SlotSource;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot endpoint
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Slot length in minutes; the configured default when absent
    pub duree: Option<i32>,
}

/// Computes the free slots of `medecin_id` on `date`.
///
/// Windows are sorted by start before generation so the result is in
/// chronological order, then identical slots coming from overlapping
/// windows are collapsed.
pub async fn available_slots<S: SlotSource + ?Sized>(
    source: &S,
    medecin_id: Uuid,
    date: NaiveDate,
    slot_length: i32,
) -> CarnetResult<Vec<Slot>> {
    validate_slot_length(slot_length)?;

    let day = DayOfWeek::from(date.weekday());
    let mut windows = source
        .windows_for_day(medecin_id, day)
        .await
        .map_err(CarnetError::Database)?;
    windows.sort_by_key(|window| (window.start, window.end));

    let bookings = source
        .active_bookings(medecin_id, date)
        .await
        .map_err(CarnetError::Database)?;

    let mut slots = generate_slots(&windows, &bookings, slot_length)?;
    slots.sort();
    slots.dedup();

    tracing::debug!(
        "Computed {} slots for medecin_id={} on {} ({}, {} windows, {} bookings)",
        slots.len(), medecin_id, date, day, windows.len(), bookings.len()
    );

    Ok(slots)
}

/// Lists bookable slots
///
/// # Endpoint
///
/// ```text
/// GET /api/medecins/:medecin_id/creneaux?date=2024-03-18&duree=30
/// ```
///
/// # Errors
///
/// * `CarnetError::InvalidArgument` - `duree` is zero or negative
/// * `CarnetError::Database` - Database error
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(medecin_id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let slot_length = query.duree.unwrap_or(state.slot_length);

    let slots = available_slots(&state.db_pool, medecin_id, query.date, slot_length).await?;

    Ok(Json(slots.into_iter().map(SlotResponse::from).collect()))
}
