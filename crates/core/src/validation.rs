//! Input validation utilities.
//!
//! This module contains functions for validating values before they are
//! embedded into query filter expressions sent to the data service.

use crate::{BoardError, BoardResult};

/// Validates that a record identifier is safe to embed in a query filter.
///
/// Identifiers are interpolated into equality filter expressions
/// (`mrn=eq.{value}`), so this applies defensive guardrails:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Restricts characters to a conservative ASCII set
///
/// # Arguments
///
/// * `mrn` - The identifier to validate.
///
/// # Errors
///
/// Returns a `BoardError::InvalidInput` if the identifier is invalid.
pub fn validate_mrn_safe_for_filter(mrn: &str) -> BoardResult<()> {
    const MAX_MRN_LEN: usize = 64;

    if mrn.trim().is_empty() {
        return Err(BoardError::InvalidInput(
            "record identifier cannot be empty".into(),
        ));
    }

    if mrn.len() > MAX_MRN_LEN {
        return Err(BoardError::InvalidInput(format!(
            "record identifier exceeds maximum length of {} characters",
            MAX_MRN_LEN
        )));
    }

    let ok = mrn
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-' | b'_'));

    if !ok {
        return Err(BoardError::InvalidInput(
            "record identifier contains invalid characters (only alphanumeric, '.', '-', '_' allowed)"
                .into(),
        ));
    }

    Ok(())
}

/// Validates that a logical table name is safe to embed in a request path.
///
/// # Errors
///
/// Returns a `BoardError::InvalidInput` if the table name is invalid.
pub fn validate_table_name(table: &str) -> BoardResult<()> {
    const MAX_TABLE_LEN: usize = 63;

    if table.trim().is_empty() {
        return Err(BoardError::InvalidInput("table name cannot be empty".into()));
    }

    if table.len() > MAX_TABLE_LEN {
        return Err(BoardError::InvalidInput(format!(
            "table name exceeds maximum length of {} characters",
            MAX_TABLE_LEN
        )));
    }

    let ok = table
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'_'));

    if !ok {
        return Err(BoardError::InvalidInput(
            "table name contains invalid characters (only lowercase alphanumeric and '_' allowed)"
                .into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_mrns() {
        validate_mrn_safe_for_filter("MRN100").expect("plain mrn");
        validate_mrn_safe_for_filter("a-1.b_2").expect("punctuated mrn");
    }

    #[test]
    fn rejects_filter_breaking_mrns() {
        assert!(validate_mrn_safe_for_filter("").is_err());
        assert!(validate_mrn_safe_for_filter("MRN 100").is_err());
        assert!(validate_mrn_safe_for_filter("mrn=eq.x,status").is_err());
        assert!(validate_mrn_safe_for_filter(&"9".repeat(65)).is_err());
    }

    #[test]
    fn rejects_unsafe_table_names() {
        assert!(validate_table_name("patients").is_ok());
        assert!(validate_table_name("ward_consults2").is_ok());
        assert!(validate_table_name("Patients").is_err());
        assert!(validate_table_name("patients/rows").is_err());
        assert!(validate_table_name("").is_err());
    }
}
