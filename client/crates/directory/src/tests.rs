//! Integration-style tests for the directory crate
//!
//! Everything runs against the mock implementations; no network.

use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::id::{ApplicationId, MenuId, RoleId};

use crate::application::Directory;
use crate::domain::entities::{ApplicationDraft, MenuDraft, RoleDraft, UserDraft};
use crate::domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
use crate::error::{DirectoryError, DirectoryResult};
use crate::infra::fallback::FallbackDirectory;
use crate::infra::mock::MockDirectory;

mod mock_crud {
    use super::*;

    #[tokio::test]
    async fn applications_seeded_and_crud() {
        let dir = MockDirectory::new();

        let all = ApplicationService::list(&dir).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|a| a.alias == "crm"));

        let created = ApplicationService::create(
            &dir,
            &ApplicationDraft {
                alias: "pos".to_string(),
                name: "Punto de Venta".to_string(),
                description: String::new(),
                is_active: true,
            },
        )
        .await
        .unwrap();
        assert!(created.id.as_str().chars().all(|c| c.is_ascii_digit()));

        let updated = ApplicationService::update(
            &dir,
            &created.id,
            &ApplicationDraft {
                alias: "pos".to_string(),
                name: "Punto de Venta".to_string(),
                description: String::new(),
                is_active: false,
            },
        )
        .await
        .unwrap();
        assert!(!updated.is_active);

        ApplicationService::delete(&dir, &created.id).await.unwrap();
        assert_eq!(ApplicationService::list(&dir).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn get_missing_application_is_not_found() {
        let dir = MockDirectory::new();
        let err = ApplicationService::get(&dir, &ApplicationId::from_raw("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound("Application")));
    }

    #[tokio::test]
    async fn users_filtered_by_application() {
        let dir = MockDirectory::new();

        let crm_users =
            UserService::list_by_application(&dir, &ApplicationId::from_raw("2"))
                .await
                .unwrap();
        assert_eq!(crm_users.len(), 1);
        assert_eq!(crm_users[0].username, "vendedor1");
    }

    #[tokio::test]
    async fn user_create_and_delete() {
        let dir = MockDirectory::new();

        let created = UserService::create(
            &dir,
            &UserDraft {
                username: "maria".to_string(),
                full_name: "María López".to_string(),
                email: "maria@empresa.com".to_string(),
                is_active: true,
                password: Some("secreto".to_string()),
                roles: Vec::new(),
            },
        )
        .await
        .unwrap();

        assert_eq!(UserService::list(&dir).await.unwrap().len(), 3);
        UserService::delete(&dir, &created.id).await.unwrap();
        assert_eq!(UserService::list(&dir).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn role_menu_assignment_replaces_the_set() {
        let dir = MockDirectory::new();
        let role_id = RoleId::from_raw("admin-role-2");

        let updated = RoleService::assign_menus(
            &dir,
            &role_id,
            &[MenuId::from_raw("1"), MenuId::from_raw("4")],
        )
        .await
        .unwrap();

        assert_eq!(updated.menus.len(), 2);
        let refetched = RoleService::get(&dir, &role_id).await.unwrap();
        assert_eq!(refetched.menus, updated.menus);
    }

    #[tokio::test]
    async fn assign_menus_to_missing_role_fails() {
        let dir = MockDirectory::new();
        let err = RoleService::assign_menus(&dir, &RoleId::from_raw("ghost"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound("Role")));
    }

    #[tokio::test]
    async fn menu_hierarchy_groups_and_checks() {
        let dir = MockDirectory::new();
        let app = ApplicationId::from_raw("1");

        let tree = MenuService::hierarchy(&dir, &app).await.unwrap();
        assert_eq!(tree.len(), 4);
        assert!(tree.contains_path("/dashboard"));
        // Usuarios and Aplicaciones hang under Administración
        let admin_group = tree
            .roots
            .iter()
            .find(|n| n.node.label == "Administración")
            .unwrap();
        assert_eq!(admin_group.children.len(), 2);
    }

    #[tokio::test]
    async fn inactive_menus_excluded_from_application_listing() {
        let dir = MockDirectory::new();
        let app = ApplicationId::from_raw("1");

        let node = MenuService::create(
            &dir,
            &MenuDraft {
                application: app.clone(),
                label: "Oculto".to_string(),
                path: Some("/hidden".to_string()),
                icon: "folder".to_string(),
                order: 9,
                parent: None,
                is_active: false,
            },
        )
        .await
        .unwrap();
        assert!(!node.is_active);

        let listed = MenuService::list_by_application(&dir, &app).await.unwrap();
        assert!(listed.iter().all(|m| m.id != node.id));
    }
}

mod fallback {
    use super::*;

    /// Application service stub that always fails the same way
    struct Failing(fn() -> DirectoryError);

    impl ApplicationService for Failing {
        async fn list(&self) -> DirectoryResult<Vec<crate::Application>> {
            Err((self.0)())
        }

        async fn get(&self, _: &ApplicationId) -> DirectoryResult<crate::Application> {
            Err((self.0)())
        }

        async fn create(&self, _: &ApplicationDraft) -> DirectoryResult<crate::Application> {
            Err((self.0)())
        }

        async fn update(
            &self,
            _: &ApplicationId,
            _: &ApplicationDraft,
        ) -> DirectoryResult<crate::Application> {
            Err((self.0)())
        }

        async fn delete(&self, _: &ApplicationId) -> DirectoryResult<()> {
            Err((self.0)())
        }
    }

    #[tokio::test]
    async fn transport_failure_uses_mock() {
        let primary = Arc::new(Failing(|| {
            DirectoryError::Backend(AppError::service_unavailable("backend down"))
        }));
        let dir = FallbackDirectory::new(primary, Arc::new(MockDirectory::new()));

        let all = ApplicationService::list(&dir).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn validation_failure_is_not_masked() {
        let primary = Arc::new(Failing(|| {
            DirectoryError::Backend(AppError::not_found("Application not found"))
        }));
        let dir = FallbackDirectory::new(primary, Arc::new(MockDirectory::new()));

        let err = ApplicationService::list(&dir).await.unwrap_err();
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn timeout_counts_as_transport() {
        let primary = Arc::new(Failing(|| {
            DirectoryError::Backend(AppError::timeout("slow backend"))
        }));
        let dir = FallbackDirectory::new(primary, Arc::new(MockDirectory::new()));

        assert!(ApplicationService::list(&dir).await.is_ok());
    }
}

mod facade {
    use super::*;

    #[tokio::test]
    async fn dashboard_summary_counts_seeded_data() {
        let directory = Directory::new(Arc::new(MockDirectory::new()));
        let summary = directory.summary().await.unwrap();

        assert_eq!(summary.applications, 3);
        assert_eq!(summary.users, 2);
        assert_eq!(summary.roles, 3);
        assert_eq!(summary.menus, 4);
    }
}
