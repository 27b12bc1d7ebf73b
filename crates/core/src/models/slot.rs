use serde::{Deserialize, Serialize};

use crate::time::format_hhmm;

/// A bookable interval `[start, end)` in minutes of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub start: i32,
    pub end: i32,
}

/// Wire form of a [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub heure_debut: String,
    pub heure_fin: String,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            heure_debut: format_hhmm(slot.start),
            heure_fin: format_hhmm(slot.end),
        }
    }
}
