//! Application Alias Value Object
//!
//! The short slug a login targets (`admin`, `control-panel`, `crm`, ...).

use derive_more::Display;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{AuthError, AuthResult};

/// Validated application alias: lowercase letters, digits and hyphens
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationAlias(String);

impl ApplicationAlias {
    /// Normalize (NFKC), trim, lowercase and validate an alias.
    pub fn new(raw: &str) -> AuthResult<Self> {
        let normalized: String = raw.nfkc().collect::<String>().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AuthError::Validation(
                "El alias de aplicación es requerido".to_string(),
            ));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AuthError::Validation(
                "Alias de aplicación inválido".to_string(),
            ));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two aliases the responder treats as the admin console itself
    pub fn is_builtin_admin(&self) -> bool {
        matches!(self.0.as_str(), "admin" | "control-panel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        let alias = ApplicationAlias::new("  Control-Panel ").unwrap();
        assert_eq!(alias.as_str(), "control-panel");
        assert!(alias.is_builtin_admin());
    }

    #[test]
    fn test_rejects_empty_and_invalid() {
        assert!(ApplicationAlias::new("   ").is_err());
        assert!(ApplicationAlias::new("my app").is_err());
    }

    #[test]
    fn test_regular_alias_is_not_builtin() {
        assert!(!ApplicationAlias::new("crm").unwrap().is_builtin_admin());
    }
}
