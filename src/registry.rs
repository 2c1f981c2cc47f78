//! Database-backed app registry.

use async_trait::async_trait;

use pushhub_core::result::AppResult;
use pushhub_core::traits::Viewer;
use pushhub_core::types::AppId;
use pushhub_database::repositories::AppRepository;
use pushhub_element::AppRegistry;
use pushhub_entity::app::App;

/// [`AppRegistry`] backed by the app catalog table.
///
/// Visibility scoping is the host's concern; this registry exposes the
/// whole catalog to every viewer, and the host narrows sources through its
/// [`pushhub_element::PermissionChecker`].
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    apps: AppRepository,
}

impl CatalogRegistry {
    /// Create a registry over the app repository.
    pub fn new(apps: AppRepository) -> Self {
        Self { apps }
    }
}

#[async_trait]
impl AppRegistry for CatalogRegistry {
    async fn visible_apps(&self, _viewer: &Viewer) -> AppResult<Vec<App>> {
        self.apps.find_all().await
    }

    async fn find_by_id(&self, id: AppId) -> AppResult<Option<App>> {
        self.apps.find_by_id(id).await
    }
}
