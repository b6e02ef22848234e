//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided shortcodes.

use crate::error::AppError;
use serde_json::json;

/// Random bytes drawn per generated code.
const CODE_RANDOM_BYTES: usize = 4;

/// Length of a generated code, in hex characters.
const GENERATED_CODE_LENGTH: usize = 6;

/// Length bounds for custom shortcodes.
const CUSTOM_CODE_MIN: usize = 4;
const CUSTOM_CODE_MAX: usize = 20;

/// Generates a random 6-character hex shortcode.
///
/// Draws 4 bytes from the system RNG, hex-encodes them, and keeps the
/// first 6 characters, giving a space of ~16M codes. Collisions are
/// handled by the caller's bounded retry loop.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_RANDOM_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = hex::encode(buffer);
    code.truncate(GENERATED_CODE_LENGTH);
    code
}

/// Validates a user-provided custom shortcode.
///
/// # Rules
///
/// - Length: 4-20 characters
/// - Allowed characters: ASCII letters, digits, underscore, hyphen
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::bad_request(
            "Invalid shortcode format: must be 4-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::bad_request(
            "Invalid shortcode format: only letters, digits, underscore, and hyphen are allowed",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_is_hex() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_codes_satisfy_custom_code_rules() {
        let code = generate_code();
        assert!(validate_custom_code(&code).is_ok());
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 1000 draws out of ~16M values: a duplicate would be astronomically unlikely.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abcd").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("a1b2c3d4e5f6g7h8i9j0").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_separators() {
        assert!(validate_custom_code("My_Link-2024").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_custom_code("abc");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("4-20 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("a".repeat(21).as_str()).is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my@code").is_err());
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("my/code").is_err());
    }
}
