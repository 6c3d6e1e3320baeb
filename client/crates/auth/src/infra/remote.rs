//! Remote auth over the REST backend

use std::sync::Arc;

use directory::{Application, MenuNode, UserRecord};
use platform::{ApiClient, envelope};
use serde::Deserialize;

use crate::domain::entity::{RoleGrant, Session};
use crate::domain::gateway::AuthGateway;
use crate::domain::value_object::{AuthToken, Credentials};
use crate::error::{AuthError, AuthResult};

/// The decoded login response body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload {
    user: UserRecord,
    application: Application,
    #[serde(default)]
    roles: Vec<RoleGrant>,
    #[serde(default)]
    menu: Vec<MenuNode>,
    token: String,
}

/// REST-backed auth gateway
#[derive(Clone)]
pub struct RemoteAuthGateway {
    client: Arc<ApiClient>,
}

impl RemoteAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl AuthGateway for RemoteAuthGateway {
    async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        let payload = self.client.post("/auth/login", credentials).await?;

        let decoded: LoginPayload =
            envelope::decode(payload).map_err(AuthError::MalformedResponse)?;

        Ok(Session {
            user: decoded.user,
            application: decoded.application,
            roles: decoded.roles,
            menu: decoded.menu,
            token: AuthToken::from_raw(decoded.token),
        })
    }
}
