//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// display name to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a venue and one event belonging to it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((venue, event))` - The created entities
/// - `Err(DbErr)` - Database error
pub async fn create_event_with_venue(
    db: &DatabaseConnection,
) -> Result<(entity::venue::Model, entity::event::Model), DbErr> {
    let venue = crate::factory::venue::create_venue(db).await?;
    let event = crate::factory::event::create_event(db, venue.id).await?;
    Ok((venue, event))
}
