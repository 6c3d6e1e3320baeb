//! Service Traits
//!
//! Interfaces for the per-resource REST surfaces. Implementations live in
//! the infrastructure layer: `RemoteDirectory` speaks to the backend,
//! `MockDirectory` serves canned data, `FallbackDirectory` composes the
//! two in development mode.

use kernel::id::{ApplicationId, MenuId, RoleId, UserId};

use crate::domain::entities::{
    Application, ApplicationDraft, MenuDraft, MenuNode, Role, RoleDraft, UserDraft, UserRecord,
};
use crate::domain::tree::MenuTree;
use crate::error::DirectoryResult;

/// Application CRUD
#[trait_variant::make(ApplicationService: Send)]
pub trait LocalApplicationService {
    /// List all applications
    async fn list(&self) -> DirectoryResult<Vec<Application>>;

    /// Fetch one application
    async fn get(&self, id: &ApplicationId) -> DirectoryResult<Application>;

    /// Create an application
    async fn create(&self, draft: &ApplicationDraft) -> DirectoryResult<Application>;

    /// Update an application
    async fn update(&self, id: &ApplicationId, draft: &ApplicationDraft)
    -> DirectoryResult<Application>;

    /// Delete an application
    async fn delete(&self, id: &ApplicationId) -> DirectoryResult<()>;
}

/// User CRUD
#[trait_variant::make(UserService: Send)]
pub trait LocalUserService {
    /// List all users
    async fn list(&self) -> DirectoryResult<Vec<UserRecord>>;

    /// Fetch one user
    async fn get(&self, id: &UserId) -> DirectoryResult<UserRecord>;

    /// Create a user
    async fn create(&self, draft: &UserDraft) -> DirectoryResult<UserRecord>;

    /// Update a user
    async fn update(&self, id: &UserId, draft: &UserDraft) -> DirectoryResult<UserRecord>;

    /// Delete a user
    async fn delete(&self, id: &UserId) -> DirectoryResult<()>;

    /// List users assigned to one application
    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<UserRecord>>;
}

/// Role CRUD and role-to-menu assignment
#[trait_variant::make(RoleService: Send)]
pub trait LocalRoleService {
    /// List all roles
    async fn list(&self) -> DirectoryResult<Vec<Role>>;

    /// Fetch one role
    async fn get(&self, id: &RoleId) -> DirectoryResult<Role>;

    /// Create a role
    async fn create(&self, draft: &RoleDraft) -> DirectoryResult<Role>;

    /// Update a role
    async fn update(&self, id: &RoleId, draft: &RoleDraft) -> DirectoryResult<Role>;

    /// Delete a role
    async fn delete(&self, id: &RoleId) -> DirectoryResult<()>;

    /// List roles belonging to one application
    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<Role>>;

    /// Replace the set of menu nodes a role grants
    async fn assign_menus(&self, id: &RoleId, menus: &[MenuId]) -> DirectoryResult<Role>;
}

/// Menu CRUD and hierarchy retrieval
#[trait_variant::make(MenuService: Send)]
pub trait LocalMenuService {
    /// List all menu nodes (flat)
    async fn list(&self) -> DirectoryResult<Vec<MenuNode>>;

    /// Fetch one menu node
    async fn get(&self, id: &MenuId) -> DirectoryResult<MenuNode>;

    /// Create a menu node
    async fn create(&self, draft: &MenuDraft) -> DirectoryResult<MenuNode>;

    /// Update a menu node
    async fn update(&self, id: &MenuId, draft: &MenuDraft) -> DirectoryResult<MenuNode>;

    /// Delete a menu node
    async fn delete(&self, id: &MenuId) -> DirectoryResult<()>;

    /// List the active menu nodes of one application (flat)
    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<MenuNode>>;

    /// The navigable hierarchy of one application, cycle-checked
    async fn hierarchy(&self, application_id: &ApplicationId) -> DirectoryResult<MenuTree>;
}
