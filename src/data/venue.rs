use chrono::Utc;
use entity::venue;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::model::venue::{CreateVenueDto, UpdateVenueDto};

pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new venue.
    ///
    /// # Arguments
    /// - `dto`: Venue fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The created venue
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, dto: CreateVenueDto) -> Result<venue::Model, DbErr> {
        venue::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(dto.name),
            city: ActiveValue::Set(dto.city),
            radius_geofence: ActiveValue::Set(dto.radius_geofence),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a venue by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<venue::Model>, DbErr> {
        entity::prelude::Venue::find_by_id(id).one(self.db).await
    }

    /// Lists all venues, newest first.
    pub async fn list(&self) -> Result<Vec<venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .order_by_desc(venue::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies a partial update; provided fields overwrite.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated venue
    /// - `Err(DbErr)`: Venue missing or database error
    pub async fn update(&self, id: Uuid, dto: UpdateVenueDto) -> Result<venue::Model, DbErr> {
        let current = entity::prelude::Venue::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Venue {} not found", id)))?;

        let mut active: venue::ActiveModel = current.into();
        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(city) = dto.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(radius) = dto.radius_geofence {
            active.radius_geofence = ActiveValue::Set(Some(radius));
        }

        active.update(self.db).await
    }

    /// Deletes a venue by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Venue::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
