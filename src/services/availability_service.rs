//! Availability calendar service.

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::models::{AvailabilityEntry, NewAvailabilityEntry};
use crate::repositories::{AvailabilityRepository, SpotRepository};

/// One calendar day flag as submitted by an owner.
#[derive(Debug, Clone, Copy)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub is_available: bool,
}

/// Availability service. Needs the spot repository to verify ownership
/// before any calendar write.
#[derive(Clone)]
pub struct AvailabilityService {
    repo: AvailabilityRepository,
    spots: SpotRepository,
}

impl AvailabilityService {
    pub fn new(repo: AvailabilityRepository, spots: SpotRepository) -> Self {
        Self { repo, spots }
    }

    /// Returns a spot's full calendar. Public; every entry carries a
    /// concrete flag, never a null state.
    pub async fn get_calendar(&self, spot_id: i32) -> AppResult<Vec<AvailabilityEntry>> {
        self.repo.list_for_spot(spot_id).await
    }

    /// Upserts a batch of per-date flags for an owned spot.
    ///
    /// The whole batch commits together or not at all, and re-submitting
    /// the same batch is a no-op at the calendar level.
    pub async fn set_calendar(
        &self,
        spot_id: i32,
        owner_id: i32,
        is_owner: bool,
        entries: Vec<CalendarEntry>,
    ) -> AppResult<usize> {
        if !is_owner {
            return Err(AppError::Forbidden {
                message: "Only owners can set availability".to_string(),
            });
        }

        self.spots
            .find_by_id_and_owner(spot_id, owner_id)
            .await?
            .ok_or_else(|| AppError::Forbidden {
                message: "You do not own this spot".to_string(),
            })?;

        let rows: Vec<NewAvailabilityEntry> = entries
            .into_iter()
            .map(|e| NewAvailabilityEntry {
                camping_spot_id: spot_id,
                date: e.date,
                is_available: e.is_available,
            })
            .collect();

        self.repo.upsert_batch(rows).await
    }
}
