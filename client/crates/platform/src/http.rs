//! Generic REST client wrapper
//!
//! Every data operation in the console goes through [`ApiClient`]: base
//! URL + fixed 10 s timeout, JSON in/out, bearer token injection, and
//! envelope normalization on the way back. Mirrors what the backend
//! expects from its browser clients.

use std::sync::RwLock;

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::envelope;

/// REST client bound to the backend base URL.
///
/// The token slot is the only mutable piece: it is set after login,
/// cleared on logout, and dropped automatically when the backend answers
/// 401 (expired or revoked token).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    dev_mode: bool,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ConsoleConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(AppError::from)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            dev_mode: config.dev_mode,
        })
    }

    /// Set the bearer token used for subsequent requests
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    /// Clear the bearer token
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// GET `<base-url><path>`, returning the normalized payload
    pub async fn get(&self, path: &str) -> AppResult<Value> {
        self.execute(reqwest::Method::GET, path, None).await
    }

    /// POST a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> AppResult<Value> {
        let body = serde_json::to_value(body)?;
        self.execute(reqwest::Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> AppResult<Value> {
        let body = serde_json::to_value(body)?;
        self.execute(reqwest::Method::PUT, path, Some(body)).await
    }

    /// DELETE `<base-url><path>`
    pub async fn delete(&self, path: &str) -> AppResult<Value> {
        self.execute(reqwest::Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        if self.dev_mode {
            tracing::debug!(
                method = %method,
                url = %url,
                has_token = self.token().is_some(),
                "API request"
            );
        }

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(AppError::from)?;
        let status = response.status();
        let raw: Value = response.json().await.unwrap_or(Value::Null);

        if self.dev_mode {
            tracing::debug!(status = status.as_u16(), url = %url, "API response");
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Expired or revoked token: drop it so the route guard
            // redirects to login on the next navigation.
            self.clear_token();
            return Err(AppError::unauthorized(backend_message(
                &raw,
                "Session expired",
            )));
        }

        if !status.is_success() {
            return Err(AppError::from_status(
                status.as_u16(),
                backend_message(&raw, "Request failed"),
            ));
        }

        envelope::normalize(raw)
    }
}

/// Pull the human-readable message out of an error body, if the backend
/// sent one.
fn backend_message(body: &Value, fallback: &'static str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(&ConsoleConfig::default()).unwrap()
    }

    #[test]
    fn test_token_slot() {
        let client = client();
        assert!(client.token().is_none());

        client.set_token("mock-jwt-token-1");
        assert_eq!(client.token().as_deref(), Some("mock-jwt-token-1"));

        client.clear_token();
        assert!(client.token().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ConsoleConfig {
            api_base_url: "http://localhost:3001/api/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn test_backend_message_extraction() {
        let body = json!({ "message": "Aplicación no encontrada" });
        assert_eq!(
            backend_message(&body, "Request failed"),
            "Aplicación no encontrada"
        );
        assert_eq!(backend_message(&Value::Null, "Request failed"), "Request failed");
    }
}
