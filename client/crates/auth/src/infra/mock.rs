//! Offline login responder
//!
//! Answers logins from the canned dataset when the backend is down.
//! Accounts, applications and menus agree with `directory`'s mock
//! services, so a mock session browses consistent data afterwards.

use directory::infra::dataset;
use directory::{ApplicationRoleAssignment, UserRecord};
use kernel::id::{RoleId, UserId};
use platform::ConsoleConfig;

use crate::domain::entity::{RoleGrant, Session};
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::{ApplicationAlias, AuthToken, Credentials};
use crate::error::{AuthError, AuthResult};

/// The built-in offline accounts
const ACCOUNTS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("vendedor1", "vend123"),
    ("superadmin", "123456"),
    ("demo", "demo123"),
];

/// Canned-data implementation of the auth gateway
#[derive(Debug, Clone, Default)]
pub struct MockAuthGateway {
    app_name: Option<String>,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
        }
    }

    fn display_name(&self, alias: &ApplicationAlias) -> String {
        if let Some(name) = &self.app_name {
            return name.clone();
        }
        match alias.as_str() {
            "admin" => "Panel de Administración".to_string(),
            _ => "Panel de Control Centralizado".to_string(),
        }
    }

    fn resolve_application(
        &self,
        alias: &ApplicationAlias,
    ) -> AuthResult<directory::Application> {
        if let Some(app) = dataset::synthesized_application(alias.as_str(), &self.display_name(alias))
        {
            return Ok(app);
        }
        dataset::applications()
            .into_iter()
            .find(|a| a.alias == alias.as_str())
            .ok_or(AuthError::ApplicationNotFound)
    }

    fn resolve_user(
        &self,
        credentials: &Credentials,
        application: &directory::Application,
    ) -> AuthResult<UserRecord> {
        let known = ACCOUNTS
            .iter()
            .any(|(u, p)| *u == credentials.username() && *p == credentials.password());
        if !known {
            return Err(AuthError::InvalidCredentials);
        }

        // The first two accounts come straight from the canned dataset;
        // the other two are synthesized against the target application.
        let record = match credentials.username() {
            "admin" => dataset::users().into_iter().find(|u| u.username == "admin"),
            "vendedor1" => dataset::users()
                .into_iter()
                .find(|u| u.username == "vendedor1"),
            "superadmin" => Some(UserRecord {
                id: UserId::from_raw("superadmin-id"),
                username: "superadmin".to_string(),
                full_name: "Super Administrador".to_string(),
                email: "superadmin@company.com".to_string(),
                is_active: true,
                roles: vec![ApplicationRoleAssignment {
                    application: application.id.clone(),
                    roles: vec![RoleId::from_raw("super-admin-role")],
                }],
            }),
            "demo" => Some(UserRecord {
                id: UserId::from_raw("3"),
                username: "demo".to_string(),
                full_name: "Usuario Demo".to_string(),
                email: "demo@empresa.com".to_string(),
                is_active: true,
                roles: vec![ApplicationRoleAssignment {
                    application: application.id.clone(),
                    roles: vec![RoleId::from_raw("demo-role-1")],
                }],
            }),
            _ => None,
        };

        record.ok_or(AuthError::InvalidCredentials)
    }
}

impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        let alias = credentials.application_alias();
        let application = self.resolve_application(alias)?;
        let user = self.resolve_user(credentials, &application)?;

        let menu = if alias.is_builtin_admin() {
            dataset::admin_menu(&application.id)
        } else {
            dataset::menu()
                .into_iter()
                .filter(|node| node.application == application.id)
                .collect()
        };

        let roles = vec![
            RoleGrant {
                id: None,
                name: "Administrador".to_string(),
                description: "Acceso completo al sistema".to_string(),
            },
            RoleGrant {
                id: None,
                name: "Usuario".to_string(),
                description: "Acceso básico".to_string(),
            },
        ];

        tracing::info!(
            username = %user.username,
            application = %application.alias,
            "Mock login succeeded"
        );

        Ok(Session {
            user,
            application,
            roles,
            menu,
            token: AuthToken::mock(),
        })
    }
}
