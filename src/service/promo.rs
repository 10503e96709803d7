use entity::sea_orm_active_enums::PromoStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::promo::{CreatePromoParams, PromoRepository, UpdatePromoParams},
    error::AppError,
    model::promo::{CreatePromoDto, PromoDto, UpdatePromoDto},
    util::parse,
};

pub struct PromoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all promos, newest first.
    pub async fn list(&self) -> Result<Vec<PromoDto>, AppError> {
        let promos = PromoRepository::new(self.db).list().await?;
        Ok(promos.into_iter().map(PromoDto::from_entity).collect())
    }

    /// Gets one promo.
    pub async fn get(&self, id: Uuid) -> Result<PromoDto, AppError> {
        let promo = PromoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promo not found".to_string()))?;
        Ok(PromoDto::from_entity(promo))
    }

    /// Promos linked to an event, newest first.
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<PromoDto>, AppError> {
        let promos = PromoRepository::new(self.db).list_by_event(event_id).await?;
        Ok(promos.into_iter().map(PromoDto::from_entity).collect())
    }

    /// Promos belonging to a venue, newest first.
    pub async fn list_by_venue(&self, venue_id: Uuid) -> Result<Vec<PromoDto>, AppError> {
        let promos = PromoRepository::new(self.db).list_by_venue(venue_id).await?;
        Ok(promos.into_iter().map(PromoDto::from_entity).collect())
    }

    /// Creates a promo.
    pub async fn create(&self, dto: CreatePromoDto) -> Result<PromoDto, AppError> {
        let params = CreatePromoParams {
            venue_id: dto.venue_id,
            event_id: dto.event_id,
            title: dto.title,
            description: dto.description,
            discount_type: parse::normalize_discount_type(&dto.discount_type)?,
            discount_value: dto.discount_value.map(parse::parse_price).transpose()?,
            status: dto
                .status
                .as_deref()
                .map(parse::normalize_promo_status)
                .transpose()?
                .unwrap_or(PromoStatus::Active),
        };
        let promo = PromoRepository::new(self.db).create(params).await?;
        Ok(PromoDto::from_entity(promo))
    }

    /// Applies a partial update; provided fields overwrite.
    pub async fn update(&self, id: Uuid, dto: UpdatePromoDto) -> Result<PromoDto, AppError> {
        let repo = PromoRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promo not found".to_string()))?;

        let params = UpdatePromoParams {
            event_id: dto.event_id,
            title: dto.title,
            description: dto.description,
            discount_type: dto
                .discount_type
                .as_deref()
                .map(parse::normalize_discount_type)
                .transpose()?,
            discount_value: dto.discount_value.map(parse::parse_price).transpose()?,
            status: dto
                .status
                .as_deref()
                .map(parse::normalize_promo_status)
                .transpose()?,
        };
        let promo = repo.update(id, params).await?;
        Ok(PromoDto::from_entity(promo))
    }

    /// Deletes a promo.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = PromoRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promo not found".to_string()))?;
        repo.delete(id).await?;
        Ok(())
    }
}
