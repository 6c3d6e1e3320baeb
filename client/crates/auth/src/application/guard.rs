//! Route Guard
//!
//! Pure decision over the session store: protected screens either wait,
//! bounce to the login screen (remembering where the user was headed),
//! or render.

use crate::application::store::SessionStore;

/// Route every successful login lands on
pub const POST_LOGIN_ROUTE: &str = "/dashboard";

/// What to do with a navigation into a protected screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session state is still resolving; show the spinner
    Loading,
    /// Not signed in; go to the login screen, keeping the origin
    RedirectToLogin { from: String },
    /// Signed in; render the screen
    Allow,
}

/// Decide whether `destination` may render given the current session.
pub fn decide(store: &SessionStore, destination: &str) -> RouteDecision {
    if store.is_loading() {
        return RouteDecision::Loading;
    }
    if store.is_authenticated() {
        return RouteDecision::Allow;
    }
    RouteDecision::RedirectToLogin {
        from: destination.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{Session, SessionBundle};
    use crate::domain::value_object::AuthToken;

    fn session() -> Session {
        let bundle: SessionBundle = serde_json::from_value(serde_json::json!({
            "user": {"_id": "1", "username": "admin", "fullName": "A", "email": "a@empresa.com"},
            "application": {"_id": "1", "alias": "admin", "name": "Panel", "description": ""},
        }))
        .unwrap();
        Session::from_bundle(bundle, AuthToken::from_raw("t"))
    }

    #[test]
    fn test_loading_waits() {
        let store = SessionStore::new();
        assert_eq!(decide(&store, "/users"), RouteDecision::Loading);
    }

    #[test]
    fn test_unauthenticated_redirects_with_origin() {
        let mut store = SessionStore::new();
        store.restore_missing();

        assert_eq!(
            decide(&store, "/roles"),
            RouteDecision::RedirectToLogin {
                from: "/roles".to_string()
            }
        );
    }

    #[test]
    fn test_authenticated_allows() {
        let mut store = SessionStore::new();
        store.restored(session());
        assert_eq!(decide(&store, "/menus"), RouteDecision::Allow);
    }
}
