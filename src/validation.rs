//! Input validation utilities.
//!
//! This module provides validation functions for secret names, repository names,
//! and repository owners to ensure they meet GitHub API requirements.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants;
use crate::errors::ValidationError;

fn secret_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(constants::validation::VALID_SECRET_KEY_PATTERN)
            .expect("secret key pattern is a valid regex")
    })
}

/// Validate a secret name according to GitHub API requirements.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name exceeds the maximum length
/// - The name contains invalid characters
pub fn validate_secret_key(key: &str) -> Result<(), ValidationError> {
    if key.trim().is_empty() {
        return Err(ValidationError::SecretKey(
            "Secret key cannot be empty".to_string(),
        ));
    }

    if key.len() > constants::validation::MAX_SECRET_KEY_LENGTH {
        return Err(ValidationError::SecretKey(format!(
            "Secret key cannot exceed {} characters (got {})",
            constants::validation::MAX_SECRET_KEY_LENGTH,
            key.len()
        )));
    }

    if !secret_key_regex().is_match(key) {
        return Err(ValidationError::SecretKey(format!(
            "Secret key can only contain letters, numbers, underscores, and hyphens. Got: '{}'",
            key
        )));
    }

    Ok(())
}

/// Validate a repository owner name.
pub fn validate_repo_owner(owner: &str) -> Result<(), ValidationError> {
    let trimmed = owner.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RepositoryOwner(
            "Repository owner cannot be empty".to_string(),
        ));
    }

    if trimmed.len() > constants::repo::MAX_OWNER_LENGTH {
        return Err(ValidationError::RepositoryOwner(format!(
            "Repository owner cannot exceed {} characters (got {})",
            constants::repo::MAX_OWNER_LENGTH,
            trimmed.len()
        )));
    }

    Ok(())
}

/// Validate a repository name.
pub fn validate_repo_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RepositoryName(
            "Repository name cannot be empty".to_string(),
        ));
    }

    if trimmed.len() > constants::repo::MAX_REPO_NAME_LENGTH {
        return Err(ValidationError::RepositoryName(format!(
            "Repository name cannot exceed {} characters (got {})",
            constants::repo::MAX_REPO_NAME_LENGTH,
            trimmed.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_key_valid() {
        assert!(validate_secret_key("MY_SECRET").is_ok());
        assert!(validate_secret_key("my-secret-123").is_ok());
        assert!(validate_secret_key("SECRET_KEY_123").is_ok());
    }

    #[test]
    fn test_validate_secret_key_invalid() {
        assert!(validate_secret_key("").is_err());
        assert!(validate_secret_key(" ").is_err());
        assert!(validate_secret_key("secret with spaces").is_err());
        assert!(validate_secret_key(" PADDED ").is_err());
        assert!(validate_secret_key("secret@invalid").is_err());
        assert!(validate_secret_key(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_repo_owner() {
        assert!(validate_repo_owner("owner").is_ok());
        assert!(validate_repo_owner("").is_err());
        assert!(validate_repo_owner(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_repo_name() {
        assert!(validate_repo_name("repo").is_ok());
        assert!(validate_repo_name("").is_err());
        assert!(validate_repo_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validation_error_kinds() {
        assert!(matches!(
            validate_secret_key("bad key"),
            Err(ValidationError::SecretKey(_))
        ));
        assert!(matches!(
            validate_repo_owner(""),
            Err(ValidationError::RepositoryOwner(_))
        ));
        assert!(matches!(
            validate_repo_name(""),
            Err(ValidationError::RepositoryName(_))
        ));
    }
}
