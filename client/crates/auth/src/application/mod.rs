//! Application Layer
//!
//! Use cases and the shared session store.

pub mod guard;
pub mod restore_session;
pub mod sign_in;
pub mod sign_out;
pub mod store;

pub use guard::{POST_LOGIN_ROUTE, RouteDecision, decide};
pub use restore_session::RestoreSessionUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use store::{SessionPhase, SessionStore};
