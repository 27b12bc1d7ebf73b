use crate::models::DbAvailability;
use carnet_core::models::availability::{AvailabilityWindow, DayOfWeek};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_availability(
    pool: &Pool<Postgres>,
    medecin_id: Uuid,
    window: &AvailabilityWindow,
) -> Result<DbAvailability> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating availability: id={}, medecin_id={}, jour={}, {}-{}",
        id, medecin_id, window.day, window.start, window.end
    );

    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO disponibilites (id, medecin_id, jour, debut_minutes, fin_minutes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, medecin_id, jour, debut_minutes, fin_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(medecin_id)
    .bind(window.day.as_str())
    .bind(window.start)
    .bind(window.end)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(availability)
}

pub async fn get_availability_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAvailability>> {
    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, medecin_id, jour, debut_minutes, fin_minutes, created_at
        FROM disponibilites
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if availability.is_none() {
        tracing::debug!("Availability not found: id={}", id);
    }

    Ok(availability)
}

/// Lists a doctor's windows ordered by weekday then start, optionally for a
/// single day.
pub async fn list_availabilities(
    pool: &Pool<Postgres>,
    medecin_id: Uuid,
    day: Option<DayOfWeek>,
) -> Result<Vec<DbAvailability>> {
    let availabilities = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, medecin_id, jour, debut_minutes, fin_minutes, created_at
        FROM disponibilites
        WHERE medecin_id = $1 AND ($2::VARCHAR IS NULL OR jour = $2)
        ORDER BY array_position(
            ARRAY['lundi', 'mardi', 'mercredi', 'jeudi', 'vendredi', 'samedi', 'dimanche']::VARCHAR[],
            jour
        ), debut_minutes ASC
        "#,
    )
    .bind(medecin_id)
    .bind(day.map(|d| d.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(availabilities)
}

pub async fn update_availability(
    pool: &Pool<Postgres>,
    id: Uuid,
    window: &AvailabilityWindow,
) -> Result<DbAvailability> {
    tracing::debug!(
        "Updating availability: id={}, jour={}, {}-{}",
        id, window.day, window.start, window.end
    );

    let availability = sqlx::query_as::<_, DbAvailability>(
        r#"
        UPDATE disponibilites
        SET jour = $2, debut_minutes = $3, fin_minutes = $4
        WHERE id = $1
        RETURNING id, medecin_id, jour, debut_minutes, fin_minutes, created_at
        "#,
    )
    .bind(id)
    .bind(window.day.as_str())
    .bind(window.start)
    .bind(window.end)
    .fetch_one(pool)
    .await?;

    Ok(availability)
}

/// Returns whether a row was deleted.
pub async fn delete_availability(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM disponibilites
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
