//! Session Entity
//!
//! The bundle a successful login produces: the authenticated user, the
//! application that was signed into, the role grants and the flat menu.
//! The persisted form (`SessionBundle`) excludes the token, which lives
//! in its own storage slot.

use directory::{Application, DirectoryResult, MenuNode, MenuTree, UserRecord};
use kernel::id::RoleId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::AuthToken;

/// A role as granted in the login response.
///
/// Unlike the directory's `Role`, grants may arrive without an id (the
/// backend flattens them to name and description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrant {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RoleId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The persisted part of a session (the `userData` slot)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBundle {
    pub user: UserRecord,
    pub application: Application,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
    #[serde(default)]
    pub menu: Vec<MenuNode>,
}

/// An authenticated session held in memory
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserRecord,
    pub application: Application,
    pub roles: Vec<RoleGrant>,
    pub menu: Vec<MenuNode>,
    pub token: AuthToken,
}

impl Session {
    pub fn from_bundle(bundle: SessionBundle, token: AuthToken) -> Self {
        Self {
            user: bundle.user,
            application: bundle.application,
            roles: bundle.roles,
            menu: bundle.menu,
            token,
        }
    }

    /// The persistable part of the session (everything but the token)
    pub fn bundle(&self) -> SessionBundle {
        SessionBundle {
            user: self.user.clone(),
            application: self.application.clone(),
            roles: self.roles.clone(),
            menu: self.menu.clone(),
        }
    }

    /// Group the flat menu entries into the sidebar hierarchy.
    pub fn menu_tree(&self) -> DirectoryResult<MenuTree> {
        MenuTree::build(self.menu.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_grant_accepts_both_id_spellings_and_none() {
        let with_underscore: RoleGrant =
            serde_json::from_value(serde_json::json!({"_id": "r1", "name": "Administrador"}))
                .unwrap();
        assert_eq!(with_underscore.id.as_ref().unwrap().as_str(), "r1");

        let with_plain: RoleGrant =
            serde_json::from_value(serde_json::json!({"id": "r1", "name": "Administrador"}))
                .unwrap();
        assert!(with_plain.id.is_some());

        let without: RoleGrant = serde_json::from_value(serde_json::json!({
            "name": "Usuario",
            "description": "Acceso básico"
        }))
        .unwrap();
        assert!(without.id.is_none());
        assert_eq!(without.description, "Acceso básico");
    }

    #[test]
    fn test_bundle_round_trip_excludes_token() {
        let bundle: SessionBundle = serde_json::from_value(serde_json::json!({
            "user": {
                "_id": "1",
                "username": "admin",
                "fullName": "Administrador del Sistema",
                "email": "admin@empresa.com"
            },
            "application": {
                "_id": "admin-app-id",
                "alias": "admin",
                "name": "Panel de Administración",
                "description": ""
            },
            "roles": [{"name": "Administrador", "description": "Acceso completo al sistema"}],
            "menu": []
        }))
        .unwrap();

        let session = Session::from_bundle(bundle, AuthToken::from_raw("mock-jwt-token-1"));
        let value = serde_json::to_value(session.bundle()).unwrap();
        assert!(value.get("token").is_none());
        assert_eq!(value["user"]["username"], "admin");
    }
}
