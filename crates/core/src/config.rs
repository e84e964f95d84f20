//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::constants::{DEFAULT_CONSULTATIONS_TABLE, DEFAULT_PATIENTS_TABLE};
use crate::validation::validate_table_name;
use crate::{BoardError, BoardResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    service_url: String,
    service_key: Option<String>,
    patients_table: String,
    consultations_table: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        service_url: String,
        service_key: Option<String>,
        patients_table: String,
        consultations_table: String,
    ) -> BoardResult<Self> {
        if service_url.trim().is_empty() {
            return Err(BoardError::InvalidInput(
                "service_url cannot be empty".into(),
            ));
        }
        validate_table_name(&patients_table)?;
        validate_table_name(&consultations_table)?;

        Ok(Self {
            service_url,
            service_key,
            patients_table,
            consultations_table,
        })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn service_key(&self) -> Option<&str> {
        self.service_key.as_deref()
    }

    pub fn patients_table(&self) -> &str {
        &self.patients_table
    }

    pub fn consultations_table(&self) -> &str {
        &self.consultations_table
    }
}

/// Resolve the data service URL from an optional environment value.
///
/// There is no sensible default for the remote service location, so a missing
/// or empty value is an error rather than a fallback.
pub fn service_url_from_env_value(value: Option<String>) -> BoardResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BoardError::InvalidInput("BOARD_SERVICE_URL must be set".into()))
}

/// Resolve a logical table name from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns `default`.
pub fn table_from_env_value(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Resolve the patients table name from an optional environment value.
pub fn patients_table_from_env_value(value: Option<String>) -> String {
    table_from_env_value(value, DEFAULT_PATIENTS_TABLE)
}

/// Resolve the consultations table name from an optional environment value.
pub fn consultations_table_from_env_value(value: Option<String>) -> String {
    table_from_env_value(value, DEFAULT_CONSULTATIONS_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_service_url() {
        let err = CoreConfig::new(
            "  ".into(),
            None,
            DEFAULT_PATIENTS_TABLE.into(),
            DEFAULT_CONSULTATIONS_TABLE.into(),
        )
        .expect_err("empty url");
        assert!(matches!(err, BoardError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unsafe_table_names() {
        let err = CoreConfig::new(
            "https://db.example.net/rest/v1".into(),
            None,
            "patients;drop".into(),
            DEFAULT_CONSULTATIONS_TABLE.into(),
        )
        .expect_err("unsafe table name");
        assert!(matches!(err, BoardError::InvalidInput(_)));
    }

    #[test]
    fn env_value_helpers_apply_defaults() {
        assert_eq!(
            patients_table_from_env_value(Some("  ".into())),
            DEFAULT_PATIENTS_TABLE
        );
        assert_eq!(
            consultations_table_from_env_value(Some("ward_consults".into())),
            "ward_consults"
        );
        assert!(service_url_from_env_value(None).is_err());
        assert_eq!(
            service_url_from_env_value(Some(" https://db.example.net ".into())).expect("url"),
            "https://db.example.net"
        );
    }
}
