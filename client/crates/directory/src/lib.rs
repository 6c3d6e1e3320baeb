//! Directory (Catalog) Client Module
//!
//! CRUD surface for the entities the admin console manages:
//! applications, users, roles and hierarchical menus.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, the menu tree, service traits
//! - `application/` - The directory facade and dashboard summary
//! - `infra/` - Remote (REST) and mock implementations, dev-mode fallback
//!
//! Every operation is a REST call through `platform::ApiClient`; in
//! development mode a transport failure falls back to the in-memory mock.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::directory::Directory;
pub use domain::entities::{
    Application, ApplicationDraft, ApplicationRoleAssignment, MenuDraft, MenuNode, Role,
    RoleDraft, UserDraft, UserRecord,
};
pub use domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
pub use domain::tree::{MenuTree, MenuTreeNode};
pub use error::{DirectoryError, DirectoryResult};
pub use infra::fallback::FallbackDirectory;
pub use infra::mock::MockDirectory;
pub use infra::remote::RemoteDirectory;

#[cfg(test)]
mod tests;
