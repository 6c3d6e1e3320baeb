//! Console Configuration
//!
//! Environment-provided configuration, read once at startup and never
//! re-read at runtime.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Console client configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the REST backend
    pub api_base_url: String,
    /// Alias of the application this console runs as
    pub app_alias: String,
    /// Display name override for the application
    pub app_name: Option<String>,
    /// Development mode: enables mock fallback and request logging
    pub dev_mode: bool,
    /// Directory backing the persisted local store
    pub state_dir: PathBuf,
    /// Fixed request timeout for all REST calls
    pub request_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
            app_alias: "control-panel".to_string(),
            app_name: None,
            dev_mode: false,
            state_dir: PathBuf::from(".console-state"),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ConsoleConfig {
    /// Build configuration from environment variables
    ///
    /// Recognized variables:
    /// * `CONSOLE_API_BASE_URL` - backend base URL
    /// * `CONSOLE_APP_ALIAS` - application alias
    /// * `CONSOLE_APP_NAME` - application display name
    /// * `CONSOLE_DEV_MODE` - "true" enables development mode
    /// * `CONSOLE_STATE_DIR` - local store directory
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("CONSOLE_API_BASE_URL").unwrap_or(defaults.api_base_url),
            app_alias: env::var("CONSOLE_APP_ALIAS").unwrap_or(defaults.app_alias),
            app_name: env::var("CONSOLE_APP_NAME").ok(),
            dev_mode: env::var("CONSOLE_DEV_MODE")
                .map(|v| v == "true")
                .unwrap_or(false),
            state_dir: env::var("CONSOLE_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_dir),
            request_timeout: defaults.request_timeout,
        }
    }

    /// Create config for development (mock fallback enabled)
    pub fn development() -> Self {
        Self {
            dev_mode: true,
            ..Default::default()
        }
    }

    /// Display name of the application, falling back to the well-known
    /// names the backend uses for the two built-in aliases.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.app_name {
            return name.clone();
        }
        match self.app_alias.as_str() {
            "admin" => "Panel de Administración".to_string(),
            _ => "Panel de Control Centralizado".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3001/api");
        assert_eq!(config.app_alias, "control-panel");
        assert!(!config.dev_mode);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_development() {
        let config = ConsoleConfig::development();
        assert!(config.dev_mode);
    }

    #[test]
    fn test_display_name() {
        let mut config = ConsoleConfig::default();
        assert_eq!(config.display_name(), "Panel de Control Centralizado");

        config.app_alias = "admin".to_string();
        assert_eq!(config.display_name(), "Panel de Administración");

        config.app_name = Some("Custom".to_string());
        assert_eq!(config.display_name(), "Custom");
    }
}
