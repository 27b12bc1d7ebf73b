use carnet_api::handlers::slots::available_slots;
use carnet_core::{
    errors::CarnetError,
    models::{
        appointment::Booking,
        availability::{AvailabilityWindow, DayOfWeek},
        slot::Slot,
    },
};
use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
}

#[tokio::test]
async fn test_slots_are_sorted_and_deduplicated() {
    let mut ctx = TestContext::new();
    let medecin_id = Uuid::new_v4();

    ctx.store
        .expect_windows_for_day()
        .with(predicate::eq(medecin_id), predicate::eq(DayOfWeek::Monday))
        .times(1)
        .returning(|_, day| {
            Ok(vec![
                AvailabilityWindow::new(day, 840, 900).unwrap(),
                AvailabilityWindow::new(day, 540, 600).unwrap(),
                AvailabilityWindow::new(day, 540, 600).unwrap(),
            ])
        });
    ctx.store
        .expect_active_bookings()
        .with(predicate::eq(medecin_id), predicate::eq(monday()))
        .times(1)
        .returning(|_, _| Ok(vec![Booking::new(570, 30)]));

    let slots = available_slots(&ctx.store, medecin_id, monday(), 30)
        .await
        .unwrap();

    assert_eq!(
        slots,
        vec![
            Slot { start: 540, end: 570 },
            Slot { start: 840, end: 870 },
            Slot { start: 870, end: 900 },
        ]
    );
}

#[tokio::test]
async fn test_date_resolves_to_its_weekday() {
    let mut ctx = TestContext::new();
    let medecin_id = Uuid::new_v4();
    let sunday = NaiveDate::from_ymd_opt(2024, 3, 24).unwrap();

    ctx.store
        .expect_windows_for_day()
        .with(predicate::eq(medecin_id), predicate::eq(DayOfWeek::Sunday))
        .times(1)
        .returning(|_, _| Ok(Vec::new()));
    ctx.store
        .expect_active_bookings()
        .returning(|_, _| Ok(Vec::new()));

    let slots = available_slots(&ctx.store, medecin_id, sunday, 30)
        .await
        .unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_invalid_length_fails_before_loading_data() {
    // No expectations: any call on the store would panic.
    let ctx = TestContext::new();

    let result = available_slots(&ctx.store, Uuid::new_v4(), monday(), 0).await;

    assert!(matches!(result, Err(CarnetError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_store_failure_is_a_database_error() {
    let mut ctx = TestContext::new();

    ctx.store
        .expect_windows_for_day()
        .returning(|_, _| Err(eyre::eyre!("connection refused")));

    let result = available_slots(&ctx.store, Uuid::new_v4(), monday(), 30).await;

    match result {
        Err(CarnetError::Database(e)) => assert!(e.to_string().contains("connection refused")),
        other => panic!("Expected Database error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_custom_length_changes_granularity() {
    let mut ctx = TestContext::new();
    let medecin_id = Uuid::new_v4();

    ctx.store
        .expect_windows_for_day()
        .returning(|_, day| Ok(vec![AvailabilityWindow::new(day, 540, 660).unwrap()]));
    ctx.store
        .expect_active_bookings()
        .returning(|_, _| Ok(Vec::new()));

    let slots = available_slots(&ctx.store, medecin_id, monday(), 45)
        .await
        .unwrap();

    assert_eq!(
        slots,
        vec![Slot { start: 540, end: 585 }, Slot { start: 585, end: 630 }]
    );
}

#[tokio::test]
async fn test_maximum_length_returns_no_slots() {
    let mut ctx = TestContext::new();

    ctx.store
        .expect_windows_for_day()
        .returning(|_, day| Ok(vec![AvailabilityWindow::new(day, 540, 720).unwrap()]));
    ctx.store
        .expect_active_bookings()
        .returning(|_, _| Ok(vec![Booking::new(600, 30)]));

    let slots = available_slots(&ctx.store, Uuid::new_v4(), monday(), i32::MAX)
        .await
        .unwrap();

    assert!(slots.is_empty());
}
