//! Domain Layer
//!
//! Entities, the menu tree, and service traits.

pub mod entities;
pub mod services;
pub mod tree;

// Re-exports
pub use entities::{Application, MenuNode, Role, UserRecord};
pub use services::{ApplicationService, MenuService, RoleService, UserService};
pub use tree::MenuTree;
