//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pooled handle, `Tz` is `Copy`, and the
//! secret is a small optional string.

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Venue-local IANA timezone used by all event window computations.
    pub events_zone: Tz,

    /// Shared secret protecting the status sweep trigger.
    pub cron_secret: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `events_zone` - Venue-local timezone
    /// - `cron_secret` - Optional shared secret for the sweep trigger
    pub fn new(db: DatabaseConnection, events_zone: Tz, cron_secret: Option<String>) -> Self {
        Self {
            db,
            events_zone,
            cron_secret,
        }
    }
}
