//! Domain Entities

pub mod session;

pub use session::{RoleGrant, Session, SessionBundle};
