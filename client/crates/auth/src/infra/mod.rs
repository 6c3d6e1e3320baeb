//! Infrastructure Layer
//!
//! Remote and offline gateway implementations, the dev-mode fallback
//! composition, and the startup strategy selection.

use std::sync::Arc;

use platform::{ApiClient, ConsoleConfig};

use crate::domain::entity::Session;
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::Credentials;
use crate::error::AuthResult;

pub mod fallback;
pub mod mock;
pub mod remote;

pub use fallback::FallbackAuthGateway;
pub use mock::MockAuthGateway;
pub use remote::RemoteAuthGateway;

/// The gateway chosen once at startup from configuration
pub enum ConfiguredGateway {
    /// Production: remote only, failures surface as-is
    Remote(RemoteAuthGateway),
    /// Development: remote with the offline responder behind it
    Fallback(FallbackAuthGateway<RemoteAuthGateway, MockAuthGateway>),
}

impl ConfiguredGateway {
    /// Select the login strategy for this run.
    pub fn from_config(config: &ConsoleConfig, client: Arc<ApiClient>) -> Self {
        let remote = RemoteAuthGateway::new(client);
        if config.dev_mode {
            let mock = MockAuthGateway::from_config(config);
            Self::Fallback(FallbackAuthGateway::new(Arc::new(remote), Arc::new(mock)))
        } else {
            Self::Remote(remote)
        }
    }
}

impl AuthGateway for ConfiguredGateway {
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        match self {
            Self::Remote(gateway) => gateway.login(credentials).await,
            Self::Fallback(gateway) => gateway.login(credentials).await,
        }
    }
}
