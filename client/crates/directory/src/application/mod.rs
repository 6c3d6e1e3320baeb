//! Application Layer
//!
//! The directory facade used by the console screens.

pub mod directory;

pub use directory::{DashboardSummary, Directory};
