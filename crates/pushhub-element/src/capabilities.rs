//! Capabilities injected by the host.
//!
//! The element type never reaches for global singletons; the app catalog
//! and permission checks are supplied as trait objects at construction.

use async_trait::async_trait;

use pushhub_core::result::AppResult;
use pushhub_core::traits::Viewer;
use pushhub_core::types::AppId;
use pushhub_entity::app::App;

/// Catalog of registered apps, scoped to what a viewer may see.
#[async_trait]
pub trait AppRegistry: Send + Sync + 'static {
    /// The apps visible to the given viewer, in catalog order.
    async fn visible_apps(&self, viewer: &Viewer) -> AppResult<Vec<App>>;

    /// Look up a single app by identifier.
    async fn find_by_id(&self, id: AppId) -> AppResult<Option<App>>;
}

/// Permission checks for admin-panel viewers.
#[async_trait]
pub trait PermissionChecker: Send + Sync + 'static {
    /// Whether the viewer holds the admin permission.
    async fn is_admin(&self, viewer: &Viewer) -> AppResult<bool>;
}
