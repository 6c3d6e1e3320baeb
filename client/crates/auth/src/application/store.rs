//! Session Store
//!
//! In-memory authentication state with a closed set of transitions.
//! The store starts in `Loading` until rehydration resolves it one way
//! or the other; screens and the route guard read it, only the use
//! cases write it.

use crate::domain::entity::Session;

/// Where the session currently stands
#[derive(Debug, Clone, Default)]
pub enum SessionPhase {
    /// Rehydration (or a login) is in flight
    #[default]
    Loading,
    /// No session; the login screen applies
    Unauthenticated,
    /// Signed in
    Authenticated(Session),
}

/// Authentication state shared by the console screens
#[derive(Debug, Default)]
pub struct SessionStore {
    phase: SessionPhase,
    error: Option<String>,
}

impl SessionStore {
    /// A fresh store, loading until rehydration settles it
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    /// The last login failure message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// A login attempt started
    pub fn begin_login(&mut self) {
        self.phase = SessionPhase::Loading;
        self.error = None;
    }

    /// A login attempt succeeded
    pub fn login_succeeded(&mut self, session: Session) {
        self.phase = SessionPhase::Authenticated(session);
        self.error = None;
    }

    /// A login attempt failed; the message is shown on the login screen
    pub fn login_failed(&mut self, message: String) {
        self.phase = SessionPhase::Unauthenticated;
        self.error = Some(message);
    }

    /// Rehydration found a stored session
    pub fn restored(&mut self, session: Session) {
        self.phase = SessionPhase::Authenticated(session);
        self.error = None;
    }

    /// Rehydration found nothing usable
    pub fn restore_missing(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.error = None;
    }

    /// The user signed out
    pub fn signed_out(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::SessionBundle;
    use crate::domain::value_object::AuthToken;

    fn session() -> Session {
        let bundle: SessionBundle = serde_json::from_value(serde_json::json!({
            "user": {"_id": "1", "username": "admin", "fullName": "A", "email": "a@empresa.com"},
            "application": {"_id": "admin-app-id", "alias": "admin", "name": "Panel", "description": ""},
            "roles": [],
            "menu": []
        }))
        .unwrap();
        Session::from_bundle(bundle, AuthToken::from_raw("mock-jwt-token-1"))
    }

    #[test]
    fn test_starts_loading() {
        let store = SessionStore::new();
        assert!(store.is_loading());
        assert!(!store.is_authenticated());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_login_failure_records_message_once() {
        let mut store = SessionStore::new();
        store.begin_login();
        assert!(store.is_loading());

        store.login_failed("Credenciales inválidas".to_string());
        assert!(!store.is_authenticated());
        assert_eq!(store.error(), Some("Credenciales inválidas"));

        // The next attempt clears the stale message
        store.begin_login();
        assert!(store.error().is_none());
    }

    #[test]
    fn test_login_success_exposes_session() {
        let mut store = SessionStore::new();
        store.begin_login();
        store.login_succeeded(session());

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("mock-jwt-token-1"));
        assert_eq!(store.session().unwrap().user.username, "admin");
    }

    #[test]
    fn test_sign_out_resets() {
        let mut store = SessionStore::new();
        store.restored(session());
        assert!(store.is_authenticated());

        store.signed_out();
        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
        assert!(store.token().is_none());
    }
}
