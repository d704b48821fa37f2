//! Module identity normalization.
//!
//! The identity names the module being generated (`user`); the global
//! identity is the display form used for filenames and in-template names
//! (`User`).

use heck::ToUpperCamelCase;

use crate::error::{Error, Result};
use crate::utils::validation;

/// Normalize a module identity: trim whitespace and peculiar leading or
/// trailing `/` characters. An identity that is empty afterwards is
/// rejected.
pub fn normalize(id: &str) -> Result<String> {
    let trimmed = validation::require_non_empty(id, "id", "Module identity cannot be empty")?;
    let trimmed = trimmed.trim_matches('/');

    if trimmed.is_empty() {
        return Err(Error::validation_invalid_argument(
            "id",
            "Module identity cannot be empty",
            Some(id.to_string()),
        ));
    }

    Ok(trimmed.to_string())
}

/// Resolve the global identity for a module.
///
/// An explicit override wins (normalized like the identity itself);
/// otherwise the identity is converted to UpperCamelCase.
pub fn global_identity(identity: &str, override_id: Option<&str>) -> Result<String> {
    match override_id {
        Some(raw) => normalize(raw),
        None => Ok(identity.to_upper_camel_case()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_surrounding_slashes() {
        assert_eq!(normalize("/User/").unwrap(), "User");
    }

    #[test]
    fn normalize_keeps_plain_identity() {
        assert_eq!(normalize("user").unwrap(), "user");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(normalize("").is_err());
        assert!(normalize("  ").is_err());
    }

    #[test]
    fn normalize_rejects_slashes_only() {
        assert!(normalize("//").is_err());
    }

    #[test]
    fn global_identity_camel_cases_by_default() {
        assert_eq!(global_identity("user", None).unwrap(), "User");
        assert_eq!(global_identity("user_account", None).unwrap(), "UserAccount");
    }

    #[test]
    fn global_identity_override_wins() {
        assert_eq!(global_identity("user", Some("Account")).unwrap(), "Account");
    }

    #[test]
    fn global_identity_override_is_slash_trimmed() {
        assert_eq!(global_identity("user", Some("/Account/")).unwrap(), "Account");
    }
}
