//! Wire DTOs and operation parameter types.
//!
//! DTOs are the stable JSON surface of the API: calendar dates render as
//! `YYYY-MM-DD` strings, wall-clock times as `HH:MM` strings (their own
//! components, never shifted through a zone), decimals as plain numbers, and
//! an event's outward status is always the computed effective status. Params
//! types carry validated, typed values from the controllers into the
//! services and repositories.

pub mod api;
pub mod event;
pub mod promo;
pub mod staff;
pub mod venue;
