use axum::http::HeaderMap;

use crate::error::AppError;

/// Guards the sweep trigger.
///
/// The caller must present the configured shared secret, either in the
/// `x-cron-secret` header or as a `token` query value. An unset secret
/// disables the endpoint entirely rather than leaving it open.
///
/// # Arguments
/// - `headers` - Request headers, checked for `x-cron-secret`
/// - `token` - Optional `token` query parameter fallback
/// - `expected` - The configured `CRON_SECRET`, if any
///
/// # Returns
/// - `Ok(())` - Secret matches
/// - `Err(AppError::Forbidden)` - Secret unset, missing, or wrong
pub fn assert_cron_auth(
    headers: &HeaderMap,
    token: Option<&str>,
    expected: Option<&str>,
) -> Result<(), AppError> {
    let Some(expected) = expected.filter(|secret| !secret.is_empty()) else {
        return Err(AppError::Forbidden(
            "CRON_SECRET is not configured".to_string(),
        ));
    };

    let provided = headers
        .get("x-cron-secret")
        .and_then(|value| value.to_str().ok())
        .or(token);

    match provided {
        Some(value) if value == expected => Ok(()),
        _ => Err(AppError::Forbidden("Invalid cron secret".to_string())),
    }
}
