use axum::http::StatusCode;

/// Validates the provided API key against the expected key resolved at
/// startup.
///
/// An absent expected key disables the check entirely, which is the local
/// development default. Returns `Ok(())` if the check passes, or a response
/// tuple suitable for returning straight from a handler.
pub fn validate_api_key(
    provided_key: Option<&str>,
    expected_key: Option<&str>,
) -> Result<(), (StatusCode, &'static str)> {
    let Some(expected) = expected_key else {
        return Ok(());
    };

    match provided_key {
        Some(provided) if provided == expected => Ok(()),
        Some(_) => Err((StatusCode::UNAUTHORIZED, "Invalid API key")),
        None => Err((StatusCode::UNAUTHORIZED, "Missing x-api-key header")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_is_disabled_without_an_expected_key() {
        assert!(validate_api_key(None, None).is_ok());
        assert!(validate_api_key(Some("anything"), None).is_ok());
    }

    #[test]
    fn rejects_missing_or_wrong_keys() {
        assert!(validate_api_key(None, Some("secret")).is_err());
        assert!(validate_api_key(Some("wrong"), Some("secret")).is_err());
        assert!(validate_api_key(Some("secret"), Some("secret")).is_ok());
    }
}
