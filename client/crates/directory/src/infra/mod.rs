//! Infrastructure Layer
//!
//! Remote (REST) and mock service implementations, plus the dev-mode
//! fallback composition.

pub mod dataset;
pub mod fallback;
pub mod mock;
pub mod remote;

pub use fallback::FallbackDirectory;
pub use mock::MockDirectory;
pub use remote::RemoteDirectory;
