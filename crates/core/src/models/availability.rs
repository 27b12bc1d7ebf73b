use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{CarnetError, CarnetResult},
    time::MINUTES_PER_DAY,
};

/// Day of the week, serialized with the French day names used by clients
/// and stored as-is in the `jour` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "lundi")]
    Monday,
    #[serde(rename = "mardi")]
    Tuesday,
    #[serde(rename = "mercredi")]
    Wednesday,
    #[serde(rename = "jeudi")]
    Thursday,
    #[serde(rename = "vendredi")]
    Friday,
    #[serde(rename = "samedi")]
    Saturday,
    #[serde(rename = "dimanche")]
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "lundi",
            DayOfWeek::Tuesday => "mardi",
            DayOfWeek::Wednesday => "mercredi",
            DayOfWeek::Thursday => "jeudi",
            DayOfWeek::Friday => "vendredi",
            DayOfWeek::Saturday => "samedi",
            DayOfWeek::Sunday => "dimanche",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CarnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == lowered)
            .ok_or_else(|| CarnetError::Validation(format!("Unknown day of week: {}", s)))
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// A recurring weekly range, in minutes of the day, during which a doctor
/// accepts appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub day: DayOfWeek,
    pub start: i32,
    pub end: i32,
}

impl AvailabilityWindow {
    /// Builds a window, enforcing `0 <= start < end <= 1440`.
    pub fn new(day: DayOfWeek, start: i32, end: i32) -> CarnetResult<Self> {
        if start < 0 || end > MINUTES_PER_DAY {
            return Err(CarnetError::Validation(format!(
                "Availability window {}-{} is outside of the day",
                start, end
            )));
        }
        if start >= end {
            return Err(CarnetError::Validation(
                "Availability window must end after it starts".to_string(),
            ));
        }
        Ok(Self { day, start, end })
    }

    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether `[start, end)` lies entirely inside this window.
    pub fn contains(&self, start: i32, end: i32) -> bool {
        self.start <= start && end <= self.end
    }

    /// Whether two windows on the same day share any minute.
    pub fn intersects(&self, other: &AvailabilityWindow) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// A stored availability window as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: Uuid,
    pub medecin_id: Uuid,
    pub jour: DayOfWeek,
    pub heure_debut: String,
    pub heure_fin: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityRequest {
    pub jour: DayOfWeek,
    pub heure_debut: String,
    pub heure_fin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub jour: Option<DayOfWeek>,
    pub heure_debut: Option<String>,
    pub heure_fin: Option<String>,
}
