//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the console client:
//! - Environment-derived configuration
//! - The generic REST client wrapper (base URL, timeout, bearer token)
//! - Response envelope normalization
//! - The persisted local key-value store (browser-localStorage equivalent)

pub mod config;
pub mod envelope;
pub mod http;
pub mod storage;

pub use config::ConsoleConfig;
pub use http::ApiClient;
pub use storage::LocalStore;
