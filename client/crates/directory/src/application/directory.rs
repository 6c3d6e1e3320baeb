//! Directory facade
//!
//! Bundles the four per-resource services behind one handle. The concrete
//! service type is chosen once at startup (remote, mock, or the dev-mode
//! fallback composition) and injected here.

use std::sync::Arc;

use crate::domain::services::{
    ApplicationService, MenuService, RoleService, UserService,
};
use crate::error::DirectoryResult;

/// Counts shown on the dashboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub applications: usize,
    pub users: usize,
    pub roles: usize,
    pub menus: usize,
}

/// Handle to the configured directory services
pub struct Directory<D> {
    services: Arc<D>,
}

impl<D> Clone for Directory<D> {
    fn clone(&self) -> Self {
        Self {
            services: Arc::clone(&self.services),
        }
    }
}

impl<D> Directory<D>
where
    D: ApplicationService + UserService + RoleService + MenuService + Send + Sync,
{
    pub fn new(services: Arc<D>) -> Self {
        Self { services }
    }

    /// The configured service implementation
    pub fn services(&self) -> &D {
        &self.services
    }

    /// Fetch the dashboard counts.
    ///
    /// Four independent list calls, issued sequentially; a failure in any
    /// of them fails the summary as a whole (the screen shows its notice
    /// and stays usable).
    pub async fn summary(&self) -> DirectoryResult<DashboardSummary> {
        let applications = ApplicationService::list(&*self.services).await?.len();
        let users = UserService::list(&*self.services).await?.len();
        let roles = RoleService::list(&*self.services).await?.len();
        let menus = MenuService::list(&*self.services).await?.len();

        Ok(DashboardSummary {
            applications,
            users,
            roles,
            menus,
        })
    }
}
