//! Dev-mode mock fallback
//!
//! Wraps a primary (remote) directory and a fallback (mock) one; a
//! transport failure on the primary is answered from the fallback with
//! the same arguments. Validation errors surface unchanged — the mock
//! never masks a 4xx. Constructed only when development mode is on, so
//! the composition itself carries no flag.

use std::sync::Arc;

use kernel::id::{ApplicationId, MenuId, RoleId, UserId};

use crate::domain::entities::{
    Application, ApplicationDraft, MenuDraft, MenuNode, Role, RoleDraft, UserDraft, UserRecord,
};
use crate::domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
use crate::domain::tree::MenuTree;
use crate::error::DirectoryResult;

/// Primary-then-mock composition of the directory services
pub struct FallbackDirectory<P, F> {
    primary: Arc<P>,
    fallback: Arc<F>,
}

impl<P, F> FallbackDirectory<P, F> {
    pub fn new(primary: Arc<P>, fallback: Arc<F>) -> Self {
        Self { primary, fallback }
    }
}

macro_rules! with_fallback {
    ($self:ident, $trait:ident :: $method:ident ( $($arg:expr),* )) => {
        match $trait::$method(&*$self.primary $(, $arg)*).await {
            Err(e) if e.is_transport() => {
                e.log();
                tracing::info!("API unavailable, using mock data");
                $trait::$method(&*$self.fallback $(, $arg)*).await
            }
            other => other,
        }
    };
}

impl<P, F> ApplicationService for FallbackDirectory<P, F>
where
    P: ApplicationService + Send + Sync,
    F: ApplicationService + Send + Sync,
{
    async fn list(&self) -> DirectoryResult<Vec<Application>> {
        with_fallback!(self, ApplicationService::list())
    }

    async fn get(&self, id: &ApplicationId) -> DirectoryResult<Application> {
        with_fallback!(self, ApplicationService::get(id))
    }

    async fn create(&self, draft: &ApplicationDraft) -> DirectoryResult<Application> {
        with_fallback!(self, ApplicationService::create(draft))
    }

    async fn update(
        &self,
        id: &ApplicationId,
        draft: &ApplicationDraft,
    ) -> DirectoryResult<Application> {
        with_fallback!(self, ApplicationService::update(id, draft))
    }

    async fn delete(&self, id: &ApplicationId) -> DirectoryResult<()> {
        with_fallback!(self, ApplicationService::delete(id))
    }
}

impl<P, F> UserService for FallbackDirectory<P, F>
where
    P: UserService + Send + Sync,
    F: UserService + Send + Sync,
{
    async fn list(&self) -> DirectoryResult<Vec<UserRecord>> {
        with_fallback!(self, UserService::list())
    }

    async fn get(&self, id: &UserId) -> DirectoryResult<UserRecord> {
        with_fallback!(self, UserService::get(id))
    }

    async fn create(&self, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        with_fallback!(self, UserService::create(draft))
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        with_fallback!(self, UserService::update(id, draft))
    }

    async fn delete(&self, id: &UserId) -> DirectoryResult<()> {
        with_fallback!(self, UserService::delete(id))
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<UserRecord>> {
        with_fallback!(self, UserService::list_by_application(application_id))
    }
}

impl<P, F> RoleService for FallbackDirectory<P, F>
where
    P: RoleService + Send + Sync,
    F: RoleService + Send + Sync,
{
    async fn list(&self) -> DirectoryResult<Vec<Role>> {
        with_fallback!(self, RoleService::list())
    }

    async fn get(&self, id: &RoleId) -> DirectoryResult<Role> {
        with_fallback!(self, RoleService::get(id))
    }

    async fn create(&self, draft: &RoleDraft) -> DirectoryResult<Role> {
        with_fallback!(self, RoleService::create(draft))
    }

    async fn update(&self, id: &RoleId, draft: &RoleDraft) -> DirectoryResult<Role> {
        with_fallback!(self, RoleService::update(id, draft))
    }

    async fn delete(&self, id: &RoleId) -> DirectoryResult<()> {
        with_fallback!(self, RoleService::delete(id))
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<Role>> {
        with_fallback!(self, RoleService::list_by_application(application_id))
    }

    async fn assign_menus(&self, id: &RoleId, menus: &[MenuId]) -> DirectoryResult<Role> {
        with_fallback!(self, RoleService::assign_menus(id, menus))
    }
}

impl<P, F> MenuService for FallbackDirectory<P, F>
where
    P: MenuService + Send + Sync,
    F: MenuService + Send + Sync,
{
    async fn list(&self) -> DirectoryResult<Vec<MenuNode>> {
        with_fallback!(self, MenuService::list())
    }

    async fn get(&self, id: &MenuId) -> DirectoryResult<MenuNode> {
        with_fallback!(self, MenuService::get(id))
    }

    async fn create(&self, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        with_fallback!(self, MenuService::create(draft))
    }

    async fn update(&self, id: &MenuId, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        with_fallback!(self, MenuService::update(id, draft))
    }

    async fn delete(&self, id: &MenuId) -> DirectoryResult<()> {
        with_fallback!(self, MenuService::delete(id))
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<MenuNode>> {
        with_fallback!(self, MenuService::list_by_application(application_id))
    }

    async fn hierarchy(&self, application_id: &ApplicationId) -> DirectoryResult<MenuTree> {
        with_fallback!(self, MenuService::hierarchy(application_id))
    }
}
