use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Venue as rendered on the wire.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VenueDto {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub radius_geofence: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl VenueDto {
    pub fn from_entity(venue: entity::venue::Model) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            radius_geofence: venue.radius_geofence,
            created_at: venue.created_at,
        }
    }
}

/// Body for creating a venue.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateVenueDto {
    pub name: String,
    pub city: Option<String>,
    pub radius_geofence: Option<f64>,
}

/// Body for partially updating a venue. Provided fields overwrite.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateVenueDto {
    pub name: Option<String>,
    pub city: Option<String>,
    pub radius_geofence: Option<f64>,
}
