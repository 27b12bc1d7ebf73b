/// Booking, listing and cancelling appointments
pub mod appointment;
/// Weekly availability windows of doctors
pub mod availability;
/// Bookable slot computation for a doctor and a date
pub mod slots;
