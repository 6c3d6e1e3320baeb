//! Sign Out Use Case
//!
//! Purely local: clears the persisted slots, drops the bearer token and
//! resets the store. No backend call is made.

use std::sync::Arc;

use platform::storage::{LocalStore, keys};
use platform::ApiClient;

use crate::application::store::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase {
    client: Arc<ApiClient>,
    local: LocalStore,
}

impl SignOutUseCase {
    pub fn new(client: Arc<ApiClient>, local: LocalStore) -> Self {
        Self { client, local }
    }

    /// Clear the session everywhere.
    ///
    /// Both slots, the bearer token and the store are cleared even when
    /// one of the removals fails; the first failure is reported after
    /// the fact. A half-signed-out state must not survive this call.
    pub fn execute(&self, store: &mut SessionStore) -> AuthResult<()> {
        let token = self.local.remove(keys::TOKEN);
        let data = self.local.remove(keys::USER_DATA);
        self.client.clear_token();
        store.signed_out();

        tracing::info!("User signed out");
        token.and(data).map_err(AuthError::Storage)
    }
}
