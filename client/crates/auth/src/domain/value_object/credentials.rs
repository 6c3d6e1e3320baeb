//! Login Credentials Value Object

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use super::alias::ApplicationAlias;
use crate::error::{AuthError, AuthResult};

/// A validated login request body.
///
/// The username is NFKC-normalized and trimmed; the password is sent
/// exactly as typed. Serializes to the shape the login endpoint expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    username: String,
    password: String,
    application_alias: ApplicationAlias,
}

impl Credentials {
    pub fn new(username: &str, password: &str, alias: ApplicationAlias) -> AuthResult<Self> {
        let username: String = username.nfkc().collect::<String>().trim().to_string();

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Usuario y contraseña son requeridos".to_string(),
            ));
        }

        Ok(Self {
            username,
            password: password.to_string(),
            application_alias: alias,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn application_alias(&self) -> &ApplicationAlias {
        &self.application_alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias() -> ApplicationAlias {
        ApplicationAlias::new("admin").unwrap()
    }

    #[test]
    fn test_trims_username_keeps_password() {
        let creds = Credentials::new(" admin ", " admin123 ", alias()).unwrap();
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), " admin123 ");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(Credentials::new("", "x", alias()).is_err());
        assert!(Credentials::new("admin", "", alias()).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let creds = Credentials::new("admin", "admin123", alias()).unwrap();
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value["applicationAlias"], "admin");
        assert_eq!(value["username"], "admin");
    }
}
