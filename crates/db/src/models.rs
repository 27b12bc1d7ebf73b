use carnet_core::{
    errors::CarnetResult,
    models::{
        appointment::{Appointment, AppointmentStatus, Booking},
        availability::{Availability, AvailabilityWindow, DayOfWeek},
    },
    time::format_hhmm,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: Uuid,
    pub medecin_id: Uuid,
    pub jour: String,
    pub debut_minutes: i32,
    pub fin_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl DbAvailability {
    /// Rebuilds the domain window, re-checking the stored range.
    pub fn to_window(&self) -> CarnetResult<AvailabilityWindow> {
        let day: DayOfWeek = self.jour.parse()?;
        AvailabilityWindow::new(day, self.debut_minutes, self.fin_minutes)
    }

    pub fn into_availability(self) -> CarnetResult<Availability> {
        Ok(Availability {
            id: self.id,
            medecin_id: self.medecin_id,
            jour: self.jour.parse()?,
            heure_debut: format_hhmm(self.debut_minutes),
            heure_fin: format_hhmm(self.fin_minutes),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub medecin_id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub heure_minutes: i32,
    pub duree: i32,
    pub statut: String,
    pub motif: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbAppointment {
    pub fn to_booking(&self) -> Booking {
        Booking::new(self.heure_minutes, self.duree)
    }

    pub fn into_appointment(self) -> CarnetResult<Appointment> {
        let statut: AppointmentStatus = self.statut.parse()?;
        Ok(Appointment {
            id: self.id,
            medecin_id: self.medecin_id,
            patient_id: self.patient_id,
            date: self.date,
            heure: format_hhmm(self.heure_minutes),
            duree: self.duree,
            statut,
            motif: self.motif,
            created_at: self.created_at,
        })
    }
}
