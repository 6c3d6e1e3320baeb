//! Restore Session Use Case
//!
//! Rehydrates the session from the persisted slots at startup. No
//! network round-trip is involved: whatever is stored is trusted as-is
//! until a later request fails with 401. A bundle that no longer parses
//! is discarded silently and the console starts signed out.

use std::sync::Arc;

use platform::storage::{LocalStore, keys};
use platform::ApiClient;

use crate::application::store::SessionStore;
use crate::domain::entity::{Session, SessionBundle};
use crate::domain::value_object::AuthToken;

/// Restore session use case
pub struct RestoreSessionUseCase {
    client: Arc<ApiClient>,
    local: LocalStore,
}

impl RestoreSessionUseCase {
    pub fn new(client: Arc<ApiClient>, local: LocalStore) -> Self {
        Self { client, local }
    }

    /// Resolve the store out of its loading phase.
    pub fn execute(&self, store: &mut SessionStore) {
        let token = self.local.get(keys::TOKEN).ok().flatten();
        let data = self.local.get(keys::USER_DATA).ok().flatten();

        let (Some(token), Some(data)) = (token, data) else {
            store.restore_missing();
            return;
        };

        match serde_json::from_str::<SessionBundle>(&data) {
            Ok(bundle) => {
                self.client.set_token(token.as_str());
                let session = Session::from_bundle(bundle, AuthToken::from_raw(token));
                tracing::info!(
                    username = %session.user.username,
                    "Session restored from local store"
                );
                store.restored(session);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Stored session unreadable, discarding");
                // Both slots go; a half-session is worse than none.
                let _ = self.local.remove(keys::TOKEN);
                let _ = self.local.remove(keys::USER_DATA);
                store.restore_missing();
            }
        }
    }
}
