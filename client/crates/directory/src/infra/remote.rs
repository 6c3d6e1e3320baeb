//! Remote directory over the REST backend
//!
//! One thin implementation per service trait, all sharing the
//! `platform::ApiClient`. Paths mirror the backend routes exactly;
//! payload decoding goes through the envelope helpers so per-endpoint
//! shape quirks stay out of this file.

use std::sync::Arc;

use kernel::id::{ApplicationId, MenuId, RoleId, UserId};
use platform::{ApiClient, envelope};
use serde_json::json;

use crate::domain::entities::{
    Application, ApplicationDraft, MenuDraft, MenuNode, Role, RoleDraft, UserDraft, UserRecord,
};
use crate::domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
use crate::domain::tree::MenuTree;
use crate::error::DirectoryResult;

/// REST-backed implementation of all four directory services
#[derive(Clone)]
pub struct RemoteDirectory {
    client: Arc<ApiClient>,
}

impl RemoteDirectory {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ApplicationService for RemoteDirectory {
    async fn list(&self) -> DirectoryResult<Vec<Application>> {
        let payload = self.client.get("/applications").await?;
        Ok(envelope::decode_list(payload, "applications")?)
    }

    async fn get(&self, id: &ApplicationId) -> DirectoryResult<Application> {
        let payload = self.client.get(&format!("/applications/{id}")).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn create(&self, draft: &ApplicationDraft) -> DirectoryResult<Application> {
        let payload = self.client.post("/applications", draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn update(
        &self,
        id: &ApplicationId,
        draft: &ApplicationDraft,
    ) -> DirectoryResult<Application> {
        let payload = self.client.put(&format!("/applications/{id}"), draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn delete(&self, id: &ApplicationId) -> DirectoryResult<()> {
        self.client.delete(&format!("/applications/{id}")).await?;
        Ok(())
    }
}

impl UserService for RemoteDirectory {
    async fn list(&self) -> DirectoryResult<Vec<UserRecord>> {
        let payload = self.client.get("/users").await?;
        Ok(envelope::decode_list(payload, "users")?)
    }

    async fn get(&self, id: &UserId) -> DirectoryResult<UserRecord> {
        let payload = self.client.get(&format!("/users/{id}")).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn create(&self, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        let payload = self.client.post("/users", draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> DirectoryResult<UserRecord> {
        let payload = self.client.put(&format!("/users/{id}"), draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn delete(&self, id: &UserId) -> DirectoryResult<()> {
        self.client.delete(&format!("/users/{id}")).await?;
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<UserRecord>> {
        let payload = self
            .client
            .get(&format!("/users/application/{application_id}"))
            .await?;
        Ok(envelope::decode_list(payload, "users")?)
    }
}

impl RoleService for RemoteDirectory {
    async fn list(&self) -> DirectoryResult<Vec<Role>> {
        let payload = self.client.get("/roles").await?;
        Ok(envelope::decode_list(payload, "roles")?)
    }

    async fn get(&self, id: &RoleId) -> DirectoryResult<Role> {
        let payload = self.client.get(&format!("/roles/{id}")).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn create(&self, draft: &RoleDraft) -> DirectoryResult<Role> {
        let payload = self.client.post("/roles", draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn update(&self, id: &RoleId, draft: &RoleDraft) -> DirectoryResult<Role> {
        let payload = self.client.put(&format!("/roles/{id}"), draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn delete(&self, id: &RoleId) -> DirectoryResult<()> {
        self.client.delete(&format!("/roles/{id}")).await?;
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<Role>> {
        let payload = self
            .client
            .get(&format!("/roles/application/{application_id}?page=1&limit=10"))
            .await?;
        Ok(envelope::decode_list(payload, "roles")?)
    }

    async fn assign_menus(&self, id: &RoleId, menus: &[MenuId]) -> DirectoryResult<Role> {
        self.client
            .post(&format!("/roles/{id}/menus"), &json!({ "menus": menus }))
            .await?;
        // The assignment endpoint answers with a bare ack; refetch for
        // the updated record.
        RoleService::get(self, id).await
    }
}

impl MenuService for RemoteDirectory {
    async fn list(&self) -> DirectoryResult<Vec<MenuNode>> {
        let payload = self.client.get("/menus").await?;
        Ok(envelope::decode_list(payload, "menus")?)
    }

    async fn get(&self, id: &MenuId) -> DirectoryResult<MenuNode> {
        let payload = self.client.get(&format!("/menus/{id}")).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn create(&self, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        let payload = self.client.post("/menus", draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn update(&self, id: &MenuId, draft: &MenuDraft) -> DirectoryResult<MenuNode> {
        let payload = self.client.put(&format!("/menus/{id}"), draft).await?;
        Ok(envelope::decode(payload)?)
    }

    async fn delete(&self, id: &MenuId) -> DirectoryResult<()> {
        self.client.delete(&format!("/menus/{id}")).await?;
        Ok(())
    }

    async fn list_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> DirectoryResult<Vec<MenuNode>> {
        let payload = self
            .client
            .get(&format!(
                "/menus/application/{application_id}?includeInactive=false"
            ))
            .await?;
        Ok(envelope::decode_list(payload, "menus")?)
    }

    async fn hierarchy(&self, application_id: &ApplicationId) -> DirectoryResult<MenuTree> {
        // The backend has a /menus/hierarchy/:id endpoint, but its nested
        // shape is unchecked; building from the flat list keeps cycle
        // detection in one place.
        let flat = MenuService::list_by_application(self, application_id).await?;
        MenuTree::build(flat)
    }
}
