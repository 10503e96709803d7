//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally; anything
//! that touches SQL — including the computed-status predicate and the bulk status sweep —
//! lives here.

pub mod event;
pub mod promo;
pub mod sales;
pub mod venue;

#[cfg(test)]
mod test;
