//! Plugin assembly.

use std::sync::Arc;

use tracing::info;

use pushhub_core::config::{AppConfig, ElementConfig};
use pushhub_core::result::AppResult;
use pushhub_database::DatabasePool;
use pushhub_database::repositories::{AppRepository, NotificationRepository};
use pushhub_element::{AppRegistry, NotificationElementType, PermissionChecker};

use crate::registry::CatalogRegistry;

/// The assembled Push Notifications plugin.
///
/// Holds the element type the host registers plus the repository used to
/// execute its element queries.
pub struct PushNotifications {
    element_type: Arc<NotificationElementType>,
    notifications: Option<Arc<NotificationRepository>>,
}

impl PushNotifications {
    /// Assemble the plugin against caller-provided capabilities, without a
    /// database connection. Useful for hosts with their own storage layer.
    pub fn assemble(
        registry: Arc<dyn AppRegistry>,
        permissions: Arc<dyn PermissionChecker>,
        config: &ElementConfig,
    ) -> Self {
        let element_type = Arc::new(NotificationElementType::with_config(
            registry,
            permissions,
            config,
        ));
        Self {
            element_type,
            notifications: None,
        }
    }

    /// Connect to the database and assemble the plugin with the built-in
    /// catalog registry and notification repository.
    pub async fn connect(
        config: &AppConfig,
        permissions: Arc<dyn PermissionChecker>,
    ) -> AppResult<Self> {
        let pool = DatabasePool::connect(&config.database).await?;

        let apps = AppRepository::new(pool.pool().clone(), config.element.table_prefix.clone());
        let registry = Arc::new(CatalogRegistry::new(apps));
        let notifications = Arc::new(NotificationRepository::new(
            pool.pool().clone(),
            config.element.table_prefix.clone(),
        ));
        let element_type = Arc::new(NotificationElementType::with_config(
            registry,
            permissions,
            &config.element,
        ));

        info!("Push Notifications element type ready");
        Ok(Self {
            element_type,
            notifications: Some(notifications),
        })
    }

    /// The element type to register with the host.
    pub fn element_type(&self) -> Arc<NotificationElementType> {
        Arc::clone(&self.element_type)
    }

    /// The notification repository, when assembled with a database.
    pub fn notifications(&self) -> Option<Arc<NotificationRepository>> {
        self.notifications.clone()
    }
}
