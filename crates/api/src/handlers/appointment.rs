//! # Appointment Handlers
//!
//! Appointments are what the slot endpoint subtracts from availability. A
//! new appointment must fit in one of the doctor's windows for its weekday
//! and must not overlap another appointment that still occupies time.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use carnet_core::{
    errors::{CarnetError, CarnetResult},
    models::{
        appointment::{Appointment, AppointmentStatus, CreateAppointmentRequest},
        availability::DayOfWeek,
    },
    slots::overlaps,
    time::{MINUTES_PER_DAY, parse_hhmm},
};
use carnet_db::{
    models::DbAppointment,
    repositories::{
        SlotSource,
        appointment::{self as repo, NewAppointment},
    },
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub date: NaiveDate,
}

/// Checks that `[start, start + duration)` on `date` can be booked.
///
/// # Errors
///
/// * `CarnetError::Validation` - `duration` is zero or negative, or the
///   appointment would end after midnight
/// * `CarnetError::Conflict` - outside every window, or overlapping an
///   active appointment
pub async fn check_bookable<S: SlotSource + ?Sized>(
    source: &S,
    medecin_id: Uuid,
    date: NaiveDate,
    start: i32,
    duration: i32,
) -> CarnetResult<()> {
    if duration <= 0 {
        return Err(CarnetError::Validation(
            "Appointment duration must be positive".to_string(),
        ));
    }
    let end = start
        .checked_add(duration)
        .filter(|end| *end <= MINUTES_PER_DAY)
        .ok_or_else(|| {
            CarnetError::Validation("Appointment must end within the day".to_string())
        })?;

    let day = DayOfWeek::from(date.weekday());
    let windows = source
        .windows_for_day(medecin_id, day)
        .await
        .map_err(CarnetError::Database)?;
    if !windows.iter().any(|window| window.contains(start, end)) {
        return Err(CarnetError::Conflict(format!(
            "Doctor is not available at the requested time on {}",
            day
        )));
    }

    let bookings = source
        .active_bookings(medecin_id, date)
        .await
        .map_err(CarnetError::Database)?;
    if bookings
        .iter()
        .any(|booking| overlaps(start, end, booking.start, booking.end()))
    {
        return Err(CarnetError::Conflict(
            "Requested time overlaps an existing appointment".to_string(),
        ));
    }

    Ok(())
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let start = parse_hhmm(&payload.heure)?;
    let duration = payload.duree.unwrap_or(state.slot_length);

    // TODO: back this check with an exclusion constraint on rendez_vous so two
    // concurrent requests cannot both book the same interval.
    check_bookable(&state.db_pool, payload.medecin_id, payload.date, start, duration).await?;

    let created = repo::create_appointment(
        &state.db_pool,
        &NewAppointment {
            medecin_id: payload.medecin_id,
            patient_id: payload.patient_id,
            date: payload.date,
            start,
            duration,
            motif: payload.motif.as_deref(),
        },
    )
    .await?;

    tracing::info!(
        "Appointment {} booked for medecin_id={} on {}",
        created.id, created.medecin_id, created.date
    );

    Ok((StatusCode::CREATED, Json(created.into_appointment()?)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Path(medecin_id): Path<Uuid>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = repo::list_appointments_for_date(&state.db_pool, medecin_id, query.date).await?;

    let appointments = rows
        .into_iter()
        .map(DbAppointment::into_appointment)
        .collect::<CarnetResult<Vec<_>>>()?;

    Ok(Json(appointments))
}

/// Cancels an appointment, freeing its slot. Cancelling twice is harmless.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let updated = repo::update_appointment_status(&state.db_pool, id, AppointmentStatus::Annule)
        .await?
        .ok_or_else(|| CarnetError::NotFound(format!("Appointment with ID {} not found", id)))?;

    Ok(Json(updated.into_appointment()?))
}
