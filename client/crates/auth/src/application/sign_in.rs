//! Sign In Use Case
//!
//! Runs a login through the configured gateway, persists the session
//! slots, and moves the session store.

use std::sync::Arc;

use platform::storage::{LocalStore, keys};
use platform::ApiClient;

use crate::application::store::SessionStore;
use crate::domain::entity::Session;
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::Credentials;
use crate::error::{AuthError, AuthResult};

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
    client: Arc<ApiClient>,
    local: LocalStore,
}

impl<G> SignInUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>, client: Arc<ApiClient>, local: LocalStore) -> Self {
        Self {
            gateway,
            client,
            local,
        }
    }

    /// Attempt a login.
    ///
    /// On success the token and bundle are persisted, the HTTP client
    /// picks up the bearer token, and the store becomes authenticated.
    /// On failure the store records the message for the login screen
    /// and the error is returned to the caller as well.
    pub async fn execute(
        &self,
        store: &mut SessionStore,
        credentials: &Credentials,
    ) -> AuthResult<()> {
        store.begin_login();

        let session = match self.gateway.login(credentials).await {
            Ok(session) => session,
            Err(error) => {
                error.log();
                store.login_failed(error.to_string());
                return Err(error);
            }
        };

        // A session that cannot be persisted is treated as a failed
        // login; the store must not stay in its loading phase.
        if let Err(error) = self.persist(&session) {
            error.log();
            store.login_failed(error.to_string());
            return Err(error);
        }

        self.client.set_token(session.token.as_str());

        tracing::info!(
            username = %session.user.username,
            application = %session.application.alias,
            mock = session.token.is_mock(),
            "User signed in"
        );

        store.login_succeeded(session);
        Ok(())
    }

    fn persist(&self, session: &Session) -> AuthResult<()> {
        let bundle = serde_json::to_string(&session.bundle())
            .map_err(|e| AuthError::Storage(e.into()))?;
        self.local
            .set(keys::TOKEN, session.token.as_str())
            .map_err(AuthError::Storage)?;
        self.local
            .set(keys::USER_DATA, &bundle)
            .map_err(AuthError::Storage)
    }
}
