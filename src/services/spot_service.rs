//! Camping spot service: listing management and the spot-deletion cascade.

use crate::error::{AppError, AppResult};
use crate::models::{CampingSpot, NewCampingSpot, UpdateCampingSpot};
use crate::repositories::{SpotFilter, SpotRepository};

fn spot_not_found(id: i32) -> AppError {
    AppError::NotFound {
        entity: "camping spot".to_string(),
        field: "id".to_string(),
        value: id.to_string(),
    }
}

fn owners_only(action: &str) -> AppError {
    AppError::Forbidden {
        message: format!("Only owners can {action}"),
    }
}

/// Camping spot service.
#[derive(Clone)]
pub struct SpotService {
    repo: SpotRepository,
}

impl SpotService {
    pub fn new(repo: SpotRepository) -> Self {
        Self { repo }
    }

    /// Creates a listing. The principal must carry the owner flag; the
    /// flag is checked at creation time only.
    pub async fn create_spot(
        &self,
        is_owner: bool,
        new_spot: NewCampingSpot,
    ) -> AppResult<CampingSpot> {
        if !is_owner {
            return Err(owners_only("create spots"));
        }
        self.repo.create(new_spot).await
    }

    /// Public spot search.
    pub async fn list_spots(&self, filter: SpotFilter) -> AppResult<Vec<CampingSpot>> {
        self.repo.list_filtered(filter).await
    }

    /// Public single-spot lookup.
    pub async fn get_spot(&self, id: i32) -> AppResult<CampingSpot> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| spot_not_found(id))
    }

    /// Lists the authenticated owner's spots.
    pub async fn list_owner_spots(
        &self,
        owner_id: i32,
        is_owner: bool,
    ) -> AppResult<Vec<CampingSpot>> {
        if !is_owner {
            return Err(owners_only("view their spots"));
        }
        self.repo.list_by_owner(owner_id).await
    }

    /// Updates a spot the principal owns. Absent fields keep their stored
    /// values. Absent spot and wrong owner are both reported as not found.
    pub async fn update_spot(
        &self,
        spot_id: i32,
        owner_id: i32,
        is_owner: bool,
        update: UpdateCampingSpot,
    ) -> AppResult<CampingSpot> {
        if !is_owner {
            return Err(owners_only("edit spots"));
        }
        self.repo
            .find_by_id_and_owner(spot_id, owner_id)
            .await?
            .ok_or_else(|| spot_not_found(spot_id))?;

        self.repo.update(spot_id, update).await
    }

    /// Deletes a spot the principal owns, removing its bookings and
    /// availability rows first so no orphaned references remain.
    pub async fn delete_spot(&self, spot_id: i32, owner_id: i32, is_owner: bool) -> AppResult<()> {
        if !is_owner {
            return Err(owners_only("delete spots"));
        }
        self.repo
            .find_by_id_and_owner(spot_id, owner_id)
            .await?
            .ok_or_else(|| spot_not_found(spot_id))?;

        self.repo.delete_cascade(spot_id).await?;
        Ok(())
    }
}
