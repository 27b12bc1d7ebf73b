use crate::models::DbAppointment;
use carnet_core::models::appointment::AppointmentStatus;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub struct NewAppointment<'a> {
    pub medecin_id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub start: i32,
    pub duration: i32,
    pub motif: Option<&'a str>,
}

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment<'_>,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, medecin_id={}, date={}, start={}, duration={}",
        id, appointment.medecin_id, appointment.date, appointment.start, appointment.duration
    );

    let created = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO rendez_vous (id, medecin_id, patient_id, date, heure_minutes, duree, statut, motif, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, medecin_id, patient_id, date, heure_minutes, duree, statut, motif, created_at
        "#,
    )
    .bind(id)
    .bind(appointment.medecin_id)
    .bind(appointment.patient_id)
    .bind(appointment.date)
    .bind(appointment.start)
    .bind(appointment.duration)
    .bind(AppointmentStatus::EnAttente.as_str())
    .bind(appointment.motif)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// All of a doctor's appointments on a date, cancelled ones included.
pub async fn list_appointments_for_date(
    pool: &Pool<Postgres>,
    medecin_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, medecin_id, patient_id, date, heure_minutes, duree, statut, motif, created_at
        FROM rendez_vous
        WHERE medecin_id = $1 AND date = $2
        ORDER BY heure_minutes ASC
        "#,
    )
    .bind(medecin_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// A doctor's appointments on a date that still occupy time.
pub async fn get_active_appointments(
    pool: &Pool<Postgres>,
    medecin_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, medecin_id, patient_id, date, heure_minutes, duree, statut, motif, created_at
        FROM rendez_vous
        WHERE medecin_id = $1 AND date = $2 AND statut <> $3
        ORDER BY heure_minutes ASC
        "#,
    )
    .bind(medecin_id)
    .bind(date)
    .bind(AppointmentStatus::Annule.as_str())
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Found {} active appointments for medecin_id={} on {}",
        appointments.len(), medecin_id, date
    );

    Ok(appointments)
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE rendez_vous
        SET statut = $2
        WHERE id = $1
        RETURNING id, medecin_id, patient_id, date, heure_minutes, duree, statut, motif, created_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}
