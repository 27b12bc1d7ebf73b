use carnet_api::handlers::appointment::check_bookable;
use carnet_core::{
    errors::CarnetError,
    models::{appointment::Booking, availability::AvailabilityWindow},
};
use chrono::NaiveDate;
use rstest::rstest;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
}

/// Tuesday 09:00-10:00 and 10:00-11:00, with 09:30-10:00 already taken.
fn context_with_morning() -> TestContext {
    let mut ctx = TestContext::new();
    ctx.store.expect_windows_for_day().returning(|_, day| {
        Ok(vec![
            AvailabilityWindow::new(day, 540, 600).unwrap(),
            AvailabilityWindow::new(day, 600, 660).unwrap(),
        ])
    });
    ctx.store
        .expect_active_bookings()
        .returning(|_, _| Ok(vec![Booking::new(570, 30)]));
    ctx
}

#[rstest]
#[case::free_slot(540, 30)]
#[case::adjacent_to_booking(600, 30)]
#[case::end_of_window(630, 30)]
#[tokio::test]
async fn test_bookable_intervals(#[case] start: i32, #[case] duration: i32) {
    let ctx = context_with_morning();

    let result = check_bookable(&ctx.store, Uuid::new_v4(), tuesday(), start, duration).await;

    assert!(result.is_ok(), "{start}+{duration} should be bookable: {result:?}");
}

#[rstest]
#[case::overlaps_booking(555, 30)]
#[case::inside_booking(575, 10)]
#[case::before_opening(510, 30)]
#[case::after_closing(660, 30)]
#[case::straddles_two_windows(585, 30)]
#[tokio::test]
async fn test_conflicting_intervals(#[case] start: i32, #[case] duration: i32) {
    let ctx = context_with_morning();

    let result = check_bookable(&ctx.store, Uuid::new_v4(), tuesday(), start, duration).await;

    match result {
        Err(CarnetError::Conflict(_)) => {}
        other => panic!("Expected Conflict for {start}+{duration}, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_positive_duration_is_rejected_without_lookup() {
    let ctx = TestContext::new();

    let result = check_bookable(&ctx.store, Uuid::new_v4(), tuesday(), 540, 0).await;

    assert!(matches!(result, Err(CarnetError::Validation(_))));
}

#[rstest]
#[case::maximum_duration(600, i32::MAX)]
#[case::maximum_start(i32::MAX, 30)]
#[case::past_midnight(1425, 30)]
#[case::longer_than_a_day(0, 24 * 60 + 1)]
#[tokio::test]
async fn test_interval_ending_after_midnight_is_rejected_without_lookup(
    #[case] start: i32,
    #[case] duration: i32,
) {
    let ctx = TestContext::new();

    let result = check_bookable(&ctx.store, Uuid::new_v4(), tuesday(), start, duration).await;

    match result {
        Err(CarnetError::Validation(_)) => {}
        other => panic!("Expected Validation for {start}+{duration}, got: {:?}", other),
    }
}
