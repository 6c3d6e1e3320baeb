//! Directory Entities
//!
//! Records as the backend stores them. The backend is Mongo-flavored:
//! documents carry `_id`, but a handful of endpoints (and the synthesized
//! admin application) say `id` instead, so deserialization accepts both.

use kernel::id::{ApplicationId, MenuId, RoleId, UserId};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

// ============================================================================
// Application
// ============================================================================

/// A tenant/product the admin console can manage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: ApplicationId,
    /// Unique slug identifying the application at login
    pub alias: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Payload for creating or updating an application
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub alias: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

// ============================================================================
// User
// ============================================================================

/// Per-application role assignment carried on a user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRoleAssignment {
    pub application: ApplicationId,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

/// A console user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<ApplicationRoleAssignment>,
}

/// Payload for creating or updating a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<ApplicationRoleAssignment>,
}

// ============================================================================
// Role
// ============================================================================

/// A named permission bundle tying users to menu nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id", alias = "id")]
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owning application; absent on the canned login roles
    #[serde(default)]
    pub application: Option<ApplicationId>,
    /// Menu nodes this role grants access to
    #[serde(default)]
    pub menus: Vec<MenuId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Payload for creating or updating a role
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationId>,
    pub is_active: bool,
}

// ============================================================================
// Menu
// ============================================================================

/// One entry in the hierarchical menu
///
/// Forms a tree via `parent` back-references; the tree itself is built
/// by [`crate::domain::tree::MenuTree`], which is where cycles are caught.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(rename = "_id", alias = "id")]
    pub id: MenuId,
    pub application: ApplicationId,
    pub label: String,
    /// Navigation target; group headers carry no path
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub parent: Option<MenuId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Payload for creating or updating a menu node
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDraft {
    pub application: ApplicationId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub icon: String,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<MenuId>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_accepts_both_id_spellings() {
        let mongo: Application = serde_json::from_value(json!({
            "_id": "2", "alias": "crm", "name": "Sistema CRM"
        }))
        .unwrap();
        let synthesized: Application = serde_json::from_value(json!({
            "id": "admin-app-id", "alias": "admin", "name": "Panel de Administración"
        }))
        .unwrap();

        assert_eq!(mongo.id.as_str(), "2");
        assert_eq!(synthesized.id.as_str(), "admin-app-id");
        assert!(mongo.is_active);
        assert_eq!(mongo.description, "");
    }

    #[test]
    fn test_menu_node_defaults() {
        let node: MenuNode = serde_json::from_value(json!({
            "_id": "2", "application": "1", "label": "Administración",
            "path": null, "icon": "settings", "order": 2, "parent": null
        }))
        .unwrap();

        assert_eq!(node.path, None);
        assert_eq!(node.parent, None);
        assert!(node.is_active);
    }

    #[test]
    fn test_user_record_roles_shape() {
        let user: UserRecord = serde_json::from_value(json!({
            "_id": "1", "username": "admin", "fullName": "Administrador del Sistema",
            "email": "admin@empresa.com", "isActive": true,
            "roles": [{ "application": "1", "roles": ["admin-role-1", "admin-role-2"] }]
        }))
        .unwrap();

        assert_eq!(user.full_name, "Administrador del Sistema");
        assert_eq!(user.roles.len(), 1);
        assert_eq!(user.roles[0].roles.len(), 2);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = ApplicationDraft {
            alias: "crm".to_string(),
            name: "Sistema CRM".to_string(),
            description: String::new(),
            is_active: true,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["isActive"], json!(true));
        assert!(value.get("is_active").is_none());
    }
}
