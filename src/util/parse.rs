//! Boundary validation and normalization helpers.
//!
//! Request DTOs carry dates, times, statuses, and money as loosely shaped
//! strings and numbers; these helpers turn them into the typed values the
//! services work with, rejecting anything malformed with a message naming
//! the expected format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::{DiscountType, EventStatus, Gender, PromoStatus};
use rust_decimal::Decimal;

use crate::error::AppError;

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Arguments
/// - `value` - The date string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed calendar date
/// - `Err(AppError::BadRequest)` - Malformed input
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format. Expected YYYY-MM-DD".to_string()))
}

/// Parses a time-of-day value.
///
/// Accepts `HH:MM`, `HH:MM:SS`, or a full RFC 3339 / ISO datetime from which
/// only the time component is kept. Time-of-day values carry no date or zone.
///
/// # Arguments
/// - `value` - The time string to parse
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed wall-clock time
/// - `Err(AppError::BadRequest)` - Malformed input
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    if value.contains('T') {
        return DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.time())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.time())
            })
            .map_err(|_| AppError::BadRequest("Invalid time format".to_string()));
    }

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            AppError::BadRequest("Invalid time format. Expected HH:MM or HH:MM:SS".to_string())
        })
}

/// Normalizes an event status string (case-insensitive).
pub fn normalize_status(value: &str) -> Result<EventStatus, AppError> {
    match value.to_ascii_uppercase().as_str() {
        "DRAFT" => Ok(EventStatus::Draft),
        "LIVE" => Ok(EventStatus::Live),
        "CLOSED" => Ok(EventStatus::Closed),
        _ => Err(AppError::BadRequest(
            "Invalid status. Allowed: DRAFT, LIVE, CLOSED".to_string(),
        )),
    }
}

/// Normalizes a gender string (case-insensitive).
pub fn normalize_gender(value: &str) -> Result<Gender, AppError> {
    match value.to_ascii_uppercase().as_str() {
        "M" => Ok(Gender::M),
        "F" => Ok(Gender::F),
        "ALTRO" => Ok(Gender::Altro),
        _ => Err(AppError::BadRequest(
            "Invalid gender. Allowed: M, F, ALTRO".to_string(),
        )),
    }
}

/// Normalizes a promo discount type string (case-insensitive).
pub fn normalize_discount_type(value: &str) -> Result<DiscountType, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "percentage" => Ok(DiscountType::Percentage),
        "fixed" => Ok(DiscountType::Fixed),
        "free" => Ok(DiscountType::Free),
        _ => Err(AppError::BadRequest(
            "Invalid discount_type. Allowed: percentage, fixed, free".to_string(),
        )),
    }
}

/// Normalizes a promo status string (case-insensitive).
pub fn normalize_promo_status(value: &str) -> Result<PromoStatus, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "active" => Ok(PromoStatus::Active),
        "inactive" => Ok(PromoStatus::Inactive),
        "expired" => Ok(PromoStatus::Expired),
        _ => Err(AppError::BadRequest(
            "Invalid promo status. Allowed: active, inactive, expired".to_string(),
        )),
    }
}

/// Converts a non-negative finite number into a decimal money value.
pub fn parse_price(value: f64) -> Result<Decimal, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest("Invalid price value".to_string()));
    }
    Decimal::try_from(value).map_err(|_| AppError::BadRequest("Invalid price value".to_string()))
}

/// True when the value is an inline base64 image payload rather than a
/// storage path. Posters are uploaded out of band; the event row only ever
/// stores the resulting path.
pub fn is_data_url_image(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    lowered.starts_with("data:image/") && lowered.contains(";base64,")
}
