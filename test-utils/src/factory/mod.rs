//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let venue = factory::venue::create_venue(&db).await?;
//!     let event = factory::event::create_event(&db, venue.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::event::EventFactory;
//!
//! let event = EventFactory::new(&db, venue.id)
//!     .date(Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
//!     .start_time(Some(NaiveTime::from_hms_opt(23, 0, 0).unwrap()))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `venue` - Create venue entities
//! - `event` - Create event entities
//! - `entry_price` - Create entry price rules
//! - `promo` - Create promo entities
//! - `sales` - Create entry and sale ledger rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod entry_price;
pub mod event;
pub mod helpers;
pub mod promo;
pub mod sales;
pub mod venue;

// Re-export commonly used factory functions for concise usage
pub use entry_price::create_entry_price;
pub use event::create_event;
pub use promo::create_promo;
pub use sales::{create_bar_sale, create_cloakroom_sale, create_entry, create_event_table,
    create_table_sale};
pub use venue::create_venue;
