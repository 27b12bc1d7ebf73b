pub mod appointment;
pub mod availability;

use async_trait::async_trait;
use carnet_core::models::{
    appointment::Booking,
    availability::{AvailabilityWindow, DayOfWeek},
};
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Read access to the inputs of slot generation for one doctor.
#[async_trait]
pub trait SlotSource: Send + Sync {
    /// Availability windows of the doctor on the given weekday.
    async fn windows_for_day(&self, medecin_id: Uuid, day: DayOfWeek)
        -> Result<Vec<AvailabilityWindow>>;

    /// Non-cancelled appointments of the doctor on the given date.
    async fn active_bookings(&self, medecin_id: Uuid, date: NaiveDate) -> Result<Vec<Booking>>;
}

#[async_trait]
impl SlotSource for Pool<Postgres> {
    async fn windows_for_day(
        &self,
        medecin_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<AvailabilityWindow>> {
        let rows = availability::list_availabilities(self, medecin_id, Some(day)).await?;
        let windows = rows
            .iter()
            .map(|row| row.to_window())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(windows)
    }

    async fn active_bookings(&self, medecin_id: Uuid, date: NaiveDate) -> Result<Vec<Booking>> {
        let rows = appointment::get_active_appointments(self, medecin_id, date).await?;
        Ok(rows.iter().map(|row| row.to_booking()).collect())
    }
}
