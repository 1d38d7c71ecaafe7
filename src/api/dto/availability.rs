//! Availability calendar DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AvailabilityEntry;
use crate::services::CalendarEntry;

/// A single day flag in a calendar batch.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CalendarEntryRequest {
    pub date: NaiveDate,
    pub is_available: bool,
}

/// Request body for setting availability. `dates` must be an array;
/// anything else is rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct SetAvailabilityRequest {
    pub dates: Vec<CalendarEntryRequest>,
}

impl SetAvailabilityRequest {
    pub fn into_entries(self) -> Vec<CalendarEntry> {
        self.dates
            .into_iter()
            .map(|e| CalendarEntry {
                date: e.date,
                is_available: e.is_available,
            })
            .collect()
    }
}

/// One calendar entry as returned to clients; the flag is always a
/// concrete boolean.
#[derive(Debug, Serialize)]
pub struct AvailabilityEntryResponse {
    pub date: NaiveDate,
    pub is_available: bool,
}

impl From<AvailabilityEntry> for AvailabilityEntryResponse {
    fn from(entry: AvailabilityEntry) -> Self {
        Self {
            date: entry.date,
            is_available: entry.is_available,
        }
    }
}
