//! In-memory mock directory
//!
//! Offline stand-in for the REST backend, seeded with the canned dataset.
//! Create operations mint wall-clock-millis ids, the same shape the real
//! backend hands back. Explicitly a development aid, not a data store.

use std::sync::Mutex;

use kernel::id::{ApplicationId, Id, MenuId, RoleId, UserId};

use crate::domain::entities::{
    Application, ApplicationDraft, MenuDraft, MenuNode, Role, RoleDraft, UserDraft, UserRecord,
};
use crate::domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
use crate::domain::tree::MenuTree;
use crate::error::{DirectoryError, DirectoryResult};
use crate::infra::dataset;

struct MockState {
    applications: Vec<Application>,
    users: Vec<UserRecord>,
    roles: Vec<Role>,
    menus: Vec<MenuNode>,
}

/// Mock implementation of all four directory services
pub struct MockDirectory {
    state: Mutex<MockState>,
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDirectory {
    /// Seeded with the canned dataset
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                applications: dataset::applications(),
                users: dataset::users(),
                roles: dataset::roles(),
                menus: dataset::menu(),
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }
}

impl ApplicationService for MockDirectory {
    async fn list(&self) -> DirectoryResult<Vec<Application>> {
        Ok(self.state().applications.clone())
    }

    async fn get(&self, id: &ApplicationId) -> DirectoryResult<Application> {
        self.state()
            .applications
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound("Application"))
    }

    async fn create(&self, draft: &ApplicationDraft) -> DirectoryResult<Application> {
        let record = Application {
            id: Id::generate(),
            alias: draft.alias.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            is_active: draft.is_active,
        };
        self.state().applications.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &ApplicationId,
        draft: &ApplicationDraft,
    ) -> DirectoryResult<Application> {
        let mut state = self.state();
        let record = state
            .applications
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(DirectoryError::NotFound("Application"))?;
        record.alias = draft.alias.clone();
        record.name = draft.name.clone();
        record.description = draft.description.clone();
        record.is_active = draft.is_active;
        Ok(record.clone())
    }

    async fn delete(&self, id: &ApplicationId) -> DirectoryResult<()> {
        // Deleting a missing record succeeds, as the mock backend does
        self.state().applications.retain(|a| &a.id != id);
        Ok(())
    }
}

impl UserService for MockDirectory {
    async fn list(&self) -> DirectoryResult<Vec<UserRecord>> {
        Ok(self.state().users.clone())
    }

    async fn get(&self, id: &UserId) -> DirectoryResult<UserRecord> {
        self.state()
            .users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound("User"))
    }

    async fn create(&self, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        let record = UserRecord {
            id: Id::generate(),
            username: draft.username.clone(),
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            is_active: draft.is_active,
            roles: draft.roles.clone(),
        };
        self.state().users.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        let mut state = self.state();
        let record = state
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(DirectoryError::NotFound("User"))?;
        record.username = draft.username.clone();
        record.full_name = draft.full_name.clone();
        record.email = draft.email.clone();
        record.is_active = draft.is_active;
        if !draft.roles.is_empty() {
            record.roles = draft.roles.clone();
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: &UserId) -> DirectoryResult<()> {
        self.state().users.retain(|u| &u.id != id);
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<UserRecord>> {
        Ok(self
            .state()
            .users
            .iter()
            .filter(|u| u.roles.iter().any(|r| &r.application == application_id))
            .cloned()
            .collect())
    }
}

impl RoleService for MockDirectory {
    async fn list(&self) -> DirectoryResult<Vec<Role>> {
        Ok(self.state().roles.clone())
    }

    async fn get(&self, id: &RoleId) -> DirectoryResult<Role> {
        self.state()
            .roles
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound("Role"))
    }

    async fn create(&self, draft: &RoleDraft) -> DirectoryResult<Role> {
        let record = Role {
            id: Id::generate(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            application: draft.application.clone(),
            menus: Vec::new(),
            is_active: draft.is_active,
        };
        self.state().roles.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RoleId, draft: &RoleDraft) -> DirectoryResult<Role> {
        let mut state = self.state();
        let record = state
            .roles
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(DirectoryError::NotFound("Role"))?;
        record.name = draft.name.clone();
        record.description = draft.description.clone();
        if draft.application.is_some() {
            record.application = draft.application.clone();
        }
        record.is_active = draft.is_active;
        Ok(record.clone())
    }

    async fn delete(&self, id: &RoleId) -> DirectoryResult<()> {
        self.state().roles.retain(|r| &r.id != id);
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<Role>> {
        Ok(self
            .state()
            .roles
            .iter()
            .filter(|r| r.application.as_ref() == Some(application_id))
            .cloned()
            .collect())
    }

    async fn assign_menus(&self, id: &RoleId, menus: &[MenuId]) -> DirectoryResult<Role> {
        let mut state = self.state();
        let record = state
            .roles
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(DirectoryError::NotFound("Role"))?;
        record.menus = menus.to_vec();
        Ok(record.clone())
    }
}

impl MenuService for MockDirectory {
    async fn list(&self) -> DirectoryResult<Vec<MenuNode>> {
        Ok(self.state().menus.clone())
    }

    async fn get(&self, id: &MenuId) -> DirectoryResult<MenuNode> {
        self.state()
            .menus
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound("Menu"))
    }

    async fn create(&self, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        let record = MenuNode {
            id: Id::generate(),
            application: draft.application.clone(),
            label: draft.label.clone(),
            path: draft.path.clone(),
            icon: draft.icon.clone(),
            order: draft.order,
            parent: draft.parent.clone(),
            is_active: draft.is_active,
        };
        self.state().menus.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &MenuId, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        let mut state = self.state();
        let record = state
            .menus
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or(DirectoryError::NotFound("Menu"))?;
        record.application = draft.application.clone();
        record.label = draft.label.clone();
        record.path = draft.path.clone();
        record.icon = draft.icon.clone();
        record.order = draft.order;
        record.parent = draft.parent.clone();
        record.is_active = draft.is_active;
        Ok(record.clone())
    }

    async fn delete(&self, id: &MenuId) -> DirectoryResult<()> {
        self.state().menus.retain(|m| &m.id != id);
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<MenuNode>> {
        Ok(self
            .state()
            .menus
            .iter()
            .filter(|m| &m.application == application_id && m.is_active)
            .cloned()
            .collect())
    }

    async fn hierarchy(&self, application_id: &ApplicationId) -> DirectoryResult<MenuTree> {
        let flat = MenuService::list_by_application(self, application_id).await?;
        MenuTree::build(flat)
    }
}
