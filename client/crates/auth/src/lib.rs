//! Authentication Module
//!
//! Login, session persistence and the route guard for the admin
//! console.
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, credential value objects, the gateway trait
//! - `application/` - Use cases, the session store, the route guard
//! - `infra/` - Remote and offline gateways, dev-mode fallback, strategy selection

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::guard::{POST_LOGIN_ROUTE, RouteDecision, decide};
pub use application::restore_session::RestoreSessionUseCase;
pub use application::sign_in::SignInUseCase;
pub use application::sign_out::SignOutUseCase;
pub use application::store::{SessionPhase, SessionStore};
pub use domain::entity::{RoleGrant, Session, SessionBundle};
pub use domain::gateway::AuthGateway;
pub use domain::value_object::{ApplicationAlias, AuthToken, Credentials};
pub use error::{AuthError, AuthResult};
pub use infra::{ConfiguredGateway, FallbackAuthGateway, MockAuthGateway, RemoteAuthGateway};
