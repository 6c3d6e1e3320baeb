//! Auth Token Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Opaque bearer token returned by a successful login.
///
/// The console never inspects real tokens; the only structure it knows
/// about is the `mock-jwt-token-<millis>` shape minted by the offline
/// responder.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    const MOCK_PREFIX: &'static str = "mock-jwt-token-";

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint an offline token stamped with the current wall-clock millis.
    pub fn mock() -> Self {
        Self(format!(
            "{}{}",
            Self::MOCK_PREFIX,
            chrono::Utc::now().timestamp_millis()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this token was minted by the offline responder.
    pub fn is_mock(&self) -> bool {
        self.0
            .strip_prefix(Self::MOCK_PREFIX)
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_token_shape() {
        let token = AuthToken::mock();
        assert!(token.is_mock());
        assert!(token.as_str().starts_with("mock-jwt-token-"));
    }

    #[test]
    fn test_real_tokens_are_not_mock() {
        assert!(!AuthToken::from_raw("eyJhbGciOi...").is_mock());
        assert!(!AuthToken::from_raw("mock-jwt-token-").is_mock());
        assert!(!AuthToken::from_raw("mock-jwt-token-12x4").is_mock());
    }
}
