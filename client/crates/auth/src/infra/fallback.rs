//! Dev-mode login fallback
//!
//! Wraps the remote gateway; whenever the backend fails the login for
//! any reason (unreachable, timeout, non-2xx, undecodable body), the
//! offline responder answers instead. Failures the responder itself
//! raises (wrong credentials, unknown alias) surface unchanged.

use std::sync::Arc;

use crate::domain::entity::Session;
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::Credentials;
use crate::error::AuthResult;

/// Primary gateway with an offline fallback
pub struct FallbackAuthGateway<P, F> {
    primary: Arc<P>,
    fallback: Arc<F>,
}

impl<P, F> FallbackAuthGateway<P, F> {
    pub fn new(primary: Arc<P>, fallback: Arc<F>) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> AuthGateway for FallbackAuthGateway<P, F>
where
    P: AuthGateway + Send + Sync,
    F: AuthGateway + Send + Sync,
{
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        match self.primary.login(credentials).await {
            Ok(session) => Ok(session),
            Err(error) => {
                tracing::info!(error = %error, "Auth backend unavailable, using mock login");
                self.fallback.login(credentials).await
            }
        }
    }
}
