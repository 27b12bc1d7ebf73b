use async_trait::async_trait;
use carnet_core::models::{
    appointment::Booking,
    availability::{AvailabilityWindow, DayOfWeek},
};
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::repositories::SlotSource;

// Mock data source for testing slot and booking flows without a database
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl SlotSource for ScheduleStore {
        async fn windows_for_day(
            &self,
            medecin_id: Uuid,
            day: DayOfWeek,
        ) -> eyre::Result<Vec<AvailabilityWindow>>;

        async fn active_bookings(
            &self,
            medecin_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<Booking>>;
    }
}
