//! Local shape checks applied before any network call.

use crate::constants::{API_KEY_PREFIX, MIN_API_KEY_LEN, SHEET_ID_LEN};
use crate::error::{ClarifyError, Result};

/// Validate a Google Sheets spreadsheet id.
///
/// Ids are exactly 44 characters; anything else is rejected locally so no
/// request is ever issued for a malformed id.
pub fn validate_sheet_id(id: &str) -> Result<()> {
    if id.chars().count() != SHEET_ID_LEN {
        return Err(ClarifyError::Validation(format!(
            "invalid sheet id: expected {SHEET_ID_LEN} characters, got {}",
            id.chars().count()
        )));
    }
    Ok(())
}

/// Validate the shape of an API key where one is required.
///
/// Superficial only: prefix and minimum length. The key is never verified
/// locally beyond this; the backend is the authority.
pub fn validate_api_key(key: &str) -> Result<()> {
    let key = key.trim();
    if !key.starts_with(API_KEY_PREFIX) {
        return Err(ClarifyError::Validation(format!(
            "invalid api key: expected a key starting with {API_KEY_PREFIX:?}"
        )));
    }
    if key.len() < MIN_API_KEY_LEN {
        return Err(ClarifyError::Validation(format!(
            "invalid api key: shorter than {MIN_API_KEY_LEN} characters"
        )));
    }
    Ok(())
}

/// Reject empty or whitespace-only questions before they reach the backend.
pub fn validate_question(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        return Err(ClarifyError::Validation("question must not be empty".to_owned()));
    }
    Ok(())
}

/// Reject empty document identifiers and collection names.
pub fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClarifyError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_id_of_len(n: usize) -> String {
        "a".repeat(n)
    }

    #[test]
    fn test_sheet_id_exact_length_accepted() {
        assert!(validate_sheet_id(&sheet_id_of_len(44)).is_ok());
    }

    #[test]
    fn test_sheet_id_wrong_lengths_rejected() {
        for n in [0, 1, 10, 43, 45, 100] {
            let err = validate_sheet_id(&sheet_id_of_len(n)).unwrap_err();
            assert!(matches!(err, ClarifyError::Validation(_)), "len {n} must be rejected");
        }
    }

    #[test]
    fn test_api_key_shape() {
        assert!(validate_api_key("sk-0123456789abcdef0123456789").is_ok());
        assert!(validate_api_key("0123456789abcdef0123456789").is_err());
        assert!(validate_api_key("sk-short").is_err());
        assert!(validate_api_key("").is_err());
    }

    #[test]
    fn test_question_must_not_be_empty() {
        assert!(validate_question("what is X?").is_ok());
        assert!(validate_question("   ").is_err());
    }

    #[test]
    fn test_non_empty_fields() {
        assert!(validate_non_empty("document link", "https://docs.example").is_ok());
        let err = validate_non_empty("collection name", "").unwrap_err();
        assert!(err.to_string().contains("collection name"));
    }
}
