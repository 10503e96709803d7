//! SeaORM entity models for the venueboard schema.
//!
//! One module per table plus the shared string-valued active enums. Entities
//! are kept free of business logic; repositories in the application crate own
//! all queries and conversions.

pub mod prelude;

pub mod bar_sale;
pub mod cloakroom_sale;
pub mod entry;
pub mod event;
pub mod event_entry_price;
pub mod event_table;
pub mod promo;
pub mod sea_orm_active_enums;
pub mod table_sale;
pub mod venue;
