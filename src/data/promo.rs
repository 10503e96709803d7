use chrono::Utc;
use entity::promo;
use entity::sea_orm_active_enums::{DiscountType, PromoStatus};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Validated parameters for a standalone promo insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePromoParams {
    pub venue_id: Uuid,
    pub event_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Option<Decimal>,
    pub status: PromoStatus,
}

/// Validated parameters for a promo update; provided fields overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePromoParams {
    pub event_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<Decimal>,
    pub status: Option<PromoStatus>,
}

pub struct PromoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new promo.
    pub async fn create(&self, params: CreatePromoParams) -> Result<promo::Model, DbErr> {
        promo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            venue_id: ActiveValue::Set(params.venue_id),
            event_id: ActiveValue::Set(params.event_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            discount_type: ActiveValue::Set(params.discount_type),
            discount_value: ActiveValue::Set(params.discount_value),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a promo by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<promo::Model>, DbErr> {
        entity::prelude::Promo::find_by_id(id).one(self.db).await
    }

    /// Lists all promos, newest first.
    pub async fn list(&self) -> Result<Vec<promo::Model>, DbErr> {
        entity::prelude::Promo::find()
            .order_by_desc(promo::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists promos linked to an event, newest first.
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<promo::Model>, DbErr> {
        entity::prelude::Promo::find()
            .filter(promo::Column::EventId.eq(event_id))
            .order_by_desc(promo::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists promos belonging to a venue, newest first.
    pub async fn list_by_venue(&self, venue_id: Uuid) -> Result<Vec<promo::Model>, DbErr> {
        entity::prelude::Promo::find()
            .filter(promo::Column::VenueId.eq(venue_id))
            .order_by_desc(promo::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies a partial update; provided fields overwrite.
    pub async fn update(&self, id: Uuid, params: UpdatePromoParams) -> Result<promo::Model, DbErr> {
        let current = entity::prelude::Promo::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Promo {} not found", id)))?;

        let mut active: promo::ActiveModel = current.into();
        if let Some(event_id) = params.event_id {
            active.event_id = ActiveValue::Set(Some(event_id));
        }
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(discount_type) = params.discount_type {
            active.discount_type = ActiveValue::Set(discount_type);
        }
        if let Some(discount_value) = params.discount_value {
            active.discount_value = ActiveValue::Set(Some(discount_value));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }

        active.update(self.db).await
    }

    /// Deletes a promo by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Promo::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
