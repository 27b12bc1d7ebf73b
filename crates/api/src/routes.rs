/// Appointment endpoints
pub mod appointment;
/// Availability and slot endpoints
pub mod availability;
/// Liveness and version endpoints
pub mod health;
