//! Directory Error Types
//!
//! Directory-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::MenuId;
use thiserror::Error;

/// Directory-specific result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory-specific error variants
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Requested record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Menu tree input contains a parent cycle
    #[error("Menu tree contains a cycle through node {0}")]
    MenuCycle(MenuId),

    /// Menu tree input repeats an id
    #[error("Duplicate menu id {0}")]
    DuplicateMenuId(MenuId),

    /// Transport or backend failure
    #[error(transparent)]
    Backend(#[from] AppError),
}

impl DirectoryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::NotFound(_) => ErrorKind::NotFound,
            DirectoryError::MenuCycle(_) | DirectoryError::DuplicateMenuId(_) => {
                ErrorKind::UnprocessableEntity
            }
            DirectoryError::Backend(e) => e.kind(),
        }
    }

    /// Whether this is a transport-level failure (backend unreachable,
    /// timed out, or 5xx). Only these trigger the dev-mode mock fallback;
    /// validation errors always surface.
    pub fn is_transport(&self) -> bool {
        match self {
            DirectoryError::Backend(e) => {
                e.is_server_error() || e.kind() == ErrorKind::RequestTimeout
            }
            _ => false,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            DirectoryError::Backend(e) if e.is_server_error() => {
                tracing::error!(error = %e, "Directory backend error");
            }
            DirectoryError::MenuCycle(id) => {
                tracing::warn!(menu_id = %id, "Rejected cyclic menu input");
            }
            _ => {
                tracing::debug!(error = %self, "Directory error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            DirectoryError::NotFound("Application").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DirectoryError::MenuCycle(MenuId::from_raw("2")).kind(),
            ErrorKind::UnprocessableEntity
        );
    }

    #[test]
    fn test_is_transport() {
        assert!(DirectoryError::Backend(AppError::service_unavailable("down")).is_transport());
        assert!(DirectoryError::Backend(AppError::timeout("slow")).is_transport());
        assert!(!DirectoryError::Backend(AppError::not_found("missing")).is_transport());
        assert!(!DirectoryError::NotFound("Role").is_transport());
    }
}
