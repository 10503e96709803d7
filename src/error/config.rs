use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `EVENTS_TIMEZONE` is not a valid IANA zone name.
    ///
    /// Event times are interpreted in this zone, so an unknown identifier must
    /// abort startup rather than silently fall back to UTC.
    #[error("Invalid IANA timezone in EVENTS_TIMEZONE: {0}")]
    InvalidTimezone(String),
}
