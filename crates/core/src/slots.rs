//! # Slot generation
//!
//! Turns a doctor's availability windows for one day into fixed-length
//! bookable slots, minus every slot touching an existing booking.
//!
//! Intervals are half-open: a slot ending at 10:00 and a booking starting at
//! 10:00 do not overlap.

use crate::{
    errors::{CarnetError, CarnetResult},
    models::{appointment::Booking, availability::AvailabilityWindow, slot::Slot},
};

/// Slot length used when the caller does not ask for another one.
pub const DEFAULT_SLOT_LENGTH_MINUTES: i32 = 30;

/// Half-open interval intersection of `[a_start, a_end)` and `[b_start, b_end)`.
pub fn overlaps(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && a_end > b_start
}

pub fn validate_slot_length(slot_length: i32) -> CarnetResult<()> {
    if slot_length <= 0 {
        return Err(CarnetError::InvalidArgument(format!(
            "Slot length must be a positive number of minutes, got {}",
            slot_length
        )));
    }
    Ok(())
}

/// Generates the free slots of `slot_length` minutes inside `windows`.
///
/// Windows are walked in the order given and each yields its slots in
/// chronological order; nothing is re-sorted or de-duplicated across
/// windows, so overlapping windows produce repeated slots. A trailing
/// remainder shorter than `slot_length` is dropped.
///
/// # Errors
///
/// * `CarnetError::InvalidArgument` - `slot_length` is zero or negative
pub fn generate_slots(
    windows: &[AvailabilityWindow],
    bookings: &[Booking],
    slot_length: i32,
) -> CarnetResult<Vec<Slot>> {
    validate_slot_length(slot_length)?;

    let mut slots = Vec::new();
    for window in windows {
        // Compared by subtraction so a huge slot length cannot overflow.
        let last_start = window.end.saturating_sub(slot_length);
        let mut start = window.start;
        while start <= last_start {
            let end = start + slot_length;
            let taken = bookings
                .iter()
                .any(|booking| overlaps(start, end, booking.start, booking.end()));
            if !taken {
                slots.push(Slot { start, end });
            }
            start += slot_length;
        }
    }

    Ok(slots)
}
