use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{promo::PromoRepository, venue::VenueRepository},
    error::AppError,
    model::{
        promo::PromoDto,
        venue::{CreateVenueDto, UpdateVenueDto, VenueDto},
    },
};

pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all venues, newest first.
    pub async fn list(&self) -> Result<Vec<VenueDto>, AppError> {
        let venues = VenueRepository::new(self.db).list().await?;
        Ok(venues.into_iter().map(VenueDto::from_entity).collect())
    }

    /// Gets one venue.
    ///
    /// # Returns
    /// - `Ok(VenueDto)`: The venue
    /// - `Err(AppError::NotFound)`: No such venue
    pub async fn get(&self, id: Uuid) -> Result<VenueDto, AppError> {
        let venue = VenueRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
        Ok(VenueDto::from_entity(venue))
    }

    /// Creates a venue.
    pub async fn create(&self, dto: CreateVenueDto) -> Result<VenueDto, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        let venue = VenueRepository::new(self.db).create(dto).await?;
        Ok(VenueDto::from_entity(venue))
    }

    /// Applies a partial update; provided fields overwrite.
    pub async fn update(&self, id: Uuid, dto: UpdateVenueDto) -> Result<VenueDto, AppError> {
        let repo = VenueRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
        let venue = repo.update(id, dto).await?;
        Ok(VenueDto::from_entity(venue))
    }

    /// Deletes a venue.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = VenueRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
        repo.delete(id).await?;
        Ok(())
    }

    /// Promos belonging to a venue, newest first.
    pub async fn list_promos(&self, venue_id: Uuid) -> Result<Vec<PromoDto>, AppError> {
        VenueRepository::new(self.db)
            .get_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let promos = PromoRepository::new(self.db).list_by_venue(venue_id).await?;
        Ok(promos.into_iter().map(PromoDto::from_entity).collect())
    }
}
