//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Login failure
//! messages are the exact strings the console shows to the operator.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown application alias
    #[error("Aplicación no encontrada")]
    ApplicationNotFound,

    /// Wrong username or password
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    /// Form-level validation failure (empty field, bad alias, ...)
    #[error("{0}")]
    Validation(String),

    /// The backend accepted the request but the payload did not decode
    #[error("Respuesta de autenticación inválida")]
    MalformedResponse(#[source] AppError),

    /// Anything raised by the HTTP layer (network, timeout, non-2xx)
    #[error(transparent)]
    Backend(#[from] AppError),

    /// Persisting or reading the session slots failed
    #[error("No se pudo guardar la sesión")]
    Storage(#[source] AppError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ApplicationNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::MalformedResponse(_) => ErrorKind::BadRequest,
            AuthError::Backend(e) => e.kind(),
            AuthError::Storage(e) => e.kind(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::ApplicationNotFound => {
                tracing::warn!("Login attempt against unknown application");
            }
            AuthError::Backend(e) => {
                tracing::error!(error = %e, "Auth backend error");
            }
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Credenciales inválidas"
        );
        assert_eq!(
            AuthError::ApplicationNotFound.to_string(),
            "Aplicación no encontrada"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::ApplicationNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AuthError::Backend(AppError::timeout("slow")).kind(),
            ErrorKind::RequestTimeout
        );
    }
}
