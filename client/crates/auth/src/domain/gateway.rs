//! Auth Gateway Trait
//!
//! The single seam between the sign-in use case and whatever actually
//! answers logins: the remote endpoint, the offline responder, or the
//! dev-mode composition of the two.

use crate::domain::entity::Session;
use crate::domain::value_object::Credentials;
use crate::error::AuthResult;

/// Answers login requests
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange credentials for an authenticated session
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session>;
}
