//! Canned mock dataset
//!
//! The records the mock services are seeded with. The auth mock responder
//! draws from the same data, so offline logins and offline CRUD screens
//! agree with each other.

use kernel::id::{ApplicationId, MenuId, RoleId, UserId};

use crate::domain::entities::{
    Application, ApplicationRoleAssignment, MenuNode, Role, UserRecord,
};

/// The three statically known applications
pub fn applications() -> Vec<Application> {
    vec![
        Application {
            id: ApplicationId::from_raw("1"),
            alias: "admin".to_string(),
            name: "Panel Administrativo".to_string(),
            description: "Sistema de administración principal".to_string(),
            is_active: true,
        },
        Application {
            id: ApplicationId::from_raw("2"),
            alias: "crm".to_string(),
            name: "Sistema CRM".to_string(),
            description: "Gestión de relaciones con clientes".to_string(),
            is_active: true,
        },
        Application {
            id: ApplicationId::from_raw("3"),
            alias: "erp".to_string(),
            name: "Sistema ERP".to_string(),
            description: "Planificación de recursos empresariales".to_string(),
            is_active: true,
        },
    ]
}

/// Synthesize the application record for the two built-in aliases
/// (`admin`, `control-panel`), which are never looked up in the list.
pub fn synthesized_application(alias: &str, display_name: &str) -> Option<Application> {
    match alias {
        "admin" => Some(Application {
            id: ApplicationId::from_raw("admin-app-id"),
            alias: "admin".to_string(),
            name: display_name.to_string(),
            description: "Sistema de administración y gestión centralizada".to_string(),
            is_active: true,
        }),
        "control-panel" => Some(Application {
            id: ApplicationId::from_raw("control-panel-id"),
            alias: "control-panel".to_string(),
            name: display_name.to_string(),
            description: "Sistema centralizado de autenticación y gestión".to_string(),
            is_active: true,
        }),
        _ => None,
    }
}

/// The two statically known user accounts
pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: UserId::from_raw("1"),
            username: "admin".to_string(),
            full_name: "Administrador del Sistema".to_string(),
            email: "admin@empresa.com".to_string(),
            is_active: true,
            roles: vec![ApplicationRoleAssignment {
                application: ApplicationId::from_raw("1"),
                roles: vec![
                    RoleId::from_raw("admin-role-1"),
                    RoleId::from_raw("admin-role-2"),
                ],
            }],
        },
        UserRecord {
            id: UserId::from_raw("2"),
            username: "vendedor1".to_string(),
            full_name: "Juan Pérez".to_string(),
            email: "juan.perez@empresa.com".to_string(),
            is_active: true,
            roles: vec![ApplicationRoleAssignment {
                application: ApplicationId::from_raw("2"),
                roles: vec![RoleId::from_raw("vendedor-role-1")],
            }],
        },
    ]
}

/// Roles referenced by the canned users
pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: RoleId::from_raw("admin-role-1"),
            name: "Administrador".to_string(),
            description: "Acceso completo al sistema".to_string(),
            application: Some(ApplicationId::from_raw("1")),
            menus: vec![
                MenuId::from_raw("1"),
                MenuId::from_raw("2"),
                MenuId::from_raw("3"),
                MenuId::from_raw("4"),
            ],
            is_active: true,
        },
        Role {
            id: RoleId::from_raw("admin-role-2"),
            name: "Usuario".to_string(),
            description: "Acceso básico".to_string(),
            application: Some(ApplicationId::from_raw("1")),
            menus: vec![MenuId::from_raw("1")],
            is_active: true,
        },
        Role {
            id: RoleId::from_raw("vendedor-role-1"),
            name: "Vendedor".to_string(),
            description: "Gestión de ventas".to_string(),
            application: Some(ApplicationId::from_raw("2")),
            menus: Vec::new(),
            is_active: true,
        },
    ]
}

/// The static menu, flat; entries belong to application `1`
pub fn menu() -> Vec<MenuNode> {
    let application = ApplicationId::from_raw("1");
    vec![
        MenuNode {
            id: MenuId::from_raw("1"),
            application: application.clone(),
            label: "Dashboard".to_string(),
            path: Some("/dashboard".to_string()),
            icon: "dashboard".to_string(),
            order: 1,
            parent: None,
            is_active: true,
        },
        MenuNode {
            id: MenuId::from_raw("2"),
            application: application.clone(),
            label: "Administración".to_string(),
            path: None,
            icon: "settings".to_string(),
            order: 2,
            parent: None,
            is_active: true,
        },
        MenuNode {
            id: MenuId::from_raw("3"),
            application: application.clone(),
            label: "Usuarios".to_string(),
            path: Some("/users".to_string()),
            icon: "people".to_string(),
            order: 1,
            parent: Some(MenuId::from_raw("2")),
            is_active: true,
        },
        MenuNode {
            id: MenuId::from_raw("4"),
            application,
            label: "Aplicaciones".to_string(),
            path: Some("/applications".to_string()),
            icon: "apps".to_string(),
            order: 2,
            parent: Some(MenuId::from_raw("2")),
            is_active: true,
        },
    ]
}

/// The six-entry menu served for the two built-in admin aliases
pub fn admin_menu(application: &ApplicationId) -> Vec<MenuNode> {
    let entry = |id: &str, label: &str, path: Option<&str>, icon: &str, order, parent: Option<&str>| {
        MenuNode {
            id: MenuId::from_raw(id),
            application: application.clone(),
            label: label.to_string(),
            path: path.map(str::to_string),
            icon: icon.to_string(),
            order,
            parent: parent.map(MenuId::from_raw),
            is_active: true,
        }
    };

    vec![
        entry("1", "Dashboard", Some("/dashboard"), "dashboard", 1, None),
        entry("2", "Administración", None, "settings", 2, None),
        entry("3", "Usuarios", Some("/users"), "people", 1, Some("2")),
        entry("4", "Aplicaciones", Some("/applications"), "apps", 2, Some("2")),
        entry("5", "Roles", Some("/roles"), "security", 3, Some("2")),
        entry("6", "Menús", Some("/menus"), "menu", 4, Some("2")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_menu_shape() {
        let menu = admin_menu(&ApplicationId::from_raw("admin-app-id"));
        assert_eq!(menu.len(), 6);
        assert!(menu.iter().any(|n| n.path.as_deref() == Some("/dashboard")));
        // One group header without a path
        assert_eq!(menu.iter().filter(|n| n.path.is_none()).count(), 1);
    }

    #[test]
    fn test_static_menu_belongs_to_application_one() {
        assert!(menu().iter().all(|n| n.application.as_str() == "1"));
    }

    #[test]
    fn test_users_reference_seeded_roles() {
        let role_ids: Vec<String> = roles().into_iter().map(|r| r.id.into_string()).collect();
        for user in users() {
            for assignment in &user.roles {
                for role in &assignment.roles {
                    assert!(role_ids.contains(&role.as_str().to_string()));
                }
            }
        }
    }
}
