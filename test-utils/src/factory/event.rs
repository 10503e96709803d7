//! Event factory for creating test event entities.
//!
//! Defaults describe a typical club night: dated tomorrow, running 23:00 to
//! 05:00 (so the window wraps past midnight), stored as DRAFT.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, venue.id)
///     .date(Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
///     .status(EventStatus::Live)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    venue_id: Uuid,
    name: String,
    description: Option<String>,
    image: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    status: EventStatus,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - date: tomorrow (UTC calendar date)
    /// - start_time: `23:00`
    /// - end_time: `05:00`
    /// - status: `Draft`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `venue_id` - Venue this event belongs to
    pub fn new(db: &'a DatabaseConnection, venue_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            venue_id,
            name: format!("Event {}", id),
            description: Some("Test event description".to_string()),
            image: None,
            date: Some(Utc::now().date_naive() + Duration::days(1)),
            start_time: NaiveTime::from_hms_opt(23, 0, 0),
            end_time: NaiveTime::from_hms_opt(5, 0, 0),
            status: EventStatus::Draft,
        }
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the poster storage path.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Sets the calendar date.
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Sets the start time-of-day.
    pub fn start_time(mut self, start_time: Option<NaiveTime>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the end time-of-day.
    pub fn end_time(mut self, end_time: Option<NaiveTime>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the stored status.
    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            venue_id: ActiveValue::Set(self.venue_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the specified venue.
///
/// Shorthand for `EventFactory::new(db, venue_id).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    venue_id: Uuid,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, venue_id).build().await
}
