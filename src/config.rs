use chrono_tz::Tz;

use crate::error::{config::ConfigError, AppError};

/// Fallback venue-local zone when `EVENTS_TIMEZONE` is unset. Event dates and
/// times are always interpreted in this zone, never in UTC or server-local
/// time.
const DEFAULT_EVENTS_TIMEZONE: &str = "Europe/Rome";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Venue-local IANA timezone for event date/time interpretation.
    pub events_timezone: Tz,

    /// Shared secret protecting the status sweep trigger; unset disables it.
    pub cron_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let zone_name = std::env::var("EVENTS_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_EVENTS_TIMEZONE.to_string());
        let events_timezone = zone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(zone_name))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            events_timezone,
            cron_secret: std::env::var("CRON_SECRET").ok(),
        })
    }
}
