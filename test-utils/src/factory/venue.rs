//! Venue factory for creating test venue entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test venues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::venue::VenueFactory;
///
/// let venue = VenueFactory::new(&db)
///     .name("Custom Club")
///     .city(Some("Roma".to_string()))
///     .build()
///     .await?;
/// ```
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: Option<String>,
    radius_geofence: Option<f64>,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Venue {id}"` where id is auto-incremented
    /// - city: `Some("Milano")`
    /// - radius_geofence: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Venue {}", id),
            city: Some("Milano".to_string()),
            radius_geofence: None,
        }
    }

    /// Sets the venue name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the venue city.
    pub fn city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    /// Sets the geofence radius in meters.
    pub fn radius_geofence(mut self, radius: Option<f64>) -> Self {
        self.radius_geofence = radius;
        self
    }

    /// Builds and inserts the venue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            radius_geofence: ActiveValue::Set(self.radius_geofence),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values.
///
/// Shorthand for `VenueFactory::new(db).build().await`.
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).build().await
}
