use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::{EventStatus, Gender};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::promo::PromoDto;

/// Event as rendered on the wire.
///
/// `status` carries the computed effective status, never the raw stored
/// column. Dates and times are formatted from their own components: a date is
/// `YYYY-MM-DD`, a time-of-day is `HH:MM` — wall-clock values with no zone
/// attached, so no zone conversion is applied when formatting.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Opaque storage path of the poster image.
    pub image: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[schema(value_type = String)]
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present on detail responses; omitted from listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_prices: Option<Vec<EntryPriceDto>>,
    pub promos: Vec<PromoDto>,
}

impl EventDto {
    /// Projects an event row and its loaded relations into the wire shape.
    ///
    /// # Arguments
    /// - `event` - The event entity from the database
    /// - `effective` - Computed effective status replacing the stored column
    /// - `entry_prices` - Entry price rules, `None` for listing responses
    /// - `promos` - Promos to embed
    ///
    /// # Returns
    /// - `EventDto` - Wire representation with normalized dates, times, and decimals
    pub fn from_parts(
        event: entity::event::Model,
        effective: EventStatus,
        entry_prices: Option<Vec<entity::event_entry_price::Model>>,
        promos: Vec<entity::promo::Model>,
    ) -> Self {
        Self {
            id: event.id,
            venue_id: event.venue_id,
            name: event.name,
            description: event.description,
            image: event.image,
            date: event.date.map(format_date),
            start_time: event.start_time.map(format_time),
            end_time: event.end_time.map(format_time),
            status: effective,
            created_at: event.created_at,
            updated_at: event.updated_at,
            entry_prices: entry_prices
                .map(|rules| rules.into_iter().map(EntryPriceDto::from_entity).collect()),
            promos: promos.into_iter().map(PromoDto::from_entity).collect(),
        }
    }
}

/// Entry price rule as rendered on the wire.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EntryPriceDto {
    pub id: Uuid,
    pub event_id: Uuid,
    pub label: Option<String>,
    #[schema(value_type = Option<String>)]
    pub gender: Option<Gender>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl EntryPriceDto {
    pub fn from_entity(rule: entity::event_entry_price::Model) -> Self {
        Self {
            id: rule.id,
            event_id: rule.event_id,
            label: rule.label,
            gender: rule.gender,
            start_time: rule.start_time.map(format_time),
            end_time: rule.end_time.map(format_time),
            price: rule.price.to_f64().unwrap_or(0.0),
            created_at: rule.created_at,
        }
    }
}

/// Paginated listing envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedEventsDto {
    pub data: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

/// Aggregated per-event totals from entries and sales.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventStatsDto {
    pub event_id: Uuid,
    pub total_entries: u64,
    pub total_bar: f64,
    pub total_cloakroom: f64,
    pub total_tables: f64,
    pub last_updated: DateTime<Utc>,
}

/// Venue-wide totals with the per-event breakdown.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VenueStatsDto {
    pub venue_id: Uuid,
    pub total_entries: u64,
    pub total_bar: f64,
    pub total_cloakroom: f64,
    pub total_tables: f64,
    pub events: Vec<EventStatsDto>,
}

/// Result of a bulk status sweep.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SyncResultDto {
    pub success: bool,
    /// Number of rows whose stored status differed from the computed one.
    pub updated: u64,
}

/// Body for creating an event.
///
/// Status is not accepted here beyond validation: client-facing writes always
/// land as DRAFT, and LIVE/CLOSED only ever come out of the window
/// computation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub venue_id: Uuid,
    pub name: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM or HH:MM:SS
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Validated but coerced to DRAFT regardless of value.
    pub status: Option<String>,
    pub description: Option<String>,
    /// Storage path of an uploaded poster; inline data URLs are rejected.
    pub image: Option<String>,
    pub entry_prices: Option<Vec<EntryPriceInputDto>>,
    pub promos: Option<Vec<PromoInputDto>>,
}

/// Body for partially updating an event. Provided fields overwrite; provided
/// entry price and promo lists replace the stored sets wholesale.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateEventDto {
    pub venue_id: Option<Uuid>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Only DRAFT is honored; computed statuses cannot be forced.
    pub status: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub entry_prices: Option<Vec<EntryPriceInputDto>>,
    pub promos: Option<Vec<PromoInputDto>>,
}

/// Entry price rule in a create/update payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EntryPriceInputDto {
    pub label: Option<String>,
    /// M | F | ALTRO
    pub gender: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub price: f64,
}

/// Promo in an event create/update payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PromoInputDto {
    pub title: String,
    pub description: Option<String>,
    /// percentage | fixed | free
    pub discount_type: String,
    pub discount_value: Option<f64>,
    /// active | inactive | expired; defaults to active
    pub status: Option<String>,
}

/// Validated parameters for inserting an event with its nested rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEventParams {
    pub venue_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: EventStatus,
    pub entry_prices: Vec<EntryPriceParams>,
    pub promos: Vec<PromoParams>,
}

/// Validated parameters for an event update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateEventParams {
    pub venue_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: Option<EventStatus>,
    /// `Some` replaces the whole entry price set, `None` leaves it untouched.
    pub entry_prices: Option<Vec<EntryPriceParams>>,
    /// `Some` replaces the promos linked to the event, `None` leaves them.
    pub promos: Option<Vec<PromoParams>>,
}

/// Validated entry price rule.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPriceParams {
    pub label: Option<String>,
    pub gender: Option<Gender>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub price: Decimal,
}

/// Validated promo attached to an event write.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoParams {
    pub venue_id: Uuid,
    pub event_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub discount_type: entity::sea_orm_active_enums::DiscountType,
    pub discount_value: Option<Decimal>,
    pub status: entity::sea_orm_active_enums::PromoStatus,
}

/// `YYYY-MM-DD` from the date's own calendar components.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM` from the stored wall-clock components; seconds are dropped.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
