use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CarnetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    EnAttente,
    Confirme,
    Annule,
    Termine,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::EnAttente => "en_attente",
            AppointmentStatus::Confirme => "confirme",
            AppointmentStatus::Annule => "annule",
            AppointmentStatus::Termine => "termine",
        }
    }

    /// Whether an appointment in this status still occupies the doctor's time.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Annule)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_attente" => Ok(AppointmentStatus::EnAttente),
            "confirme" => Ok(AppointmentStatus::Confirme),
            "annule" => Ok(AppointmentStatus::Annule),
            "termine" => Ok(AppointmentStatus::Termine),
            other => Err(CarnetError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

/// An existing appointment occupying doctor time on the target date, in
/// minutes of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start: i32,
    pub duration: i32,
}

impl Booking {
    pub fn new(start: i32, duration: i32) -> Self {
        Self { start, duration }
    }

    pub fn end(&self) -> i32 {
        self.start.saturating_add(self.duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub medecin_id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub heure: String,
    pub duree: i32,
    pub statut: AppointmentStatus,
    pub motif: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub medecin_id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub heure: String,
    pub duree: Option<i32>,
    pub motif: Option<String>,
}
