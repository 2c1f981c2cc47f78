//! The Notification element type registration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pushhub_core::config::ElementConfig;
use pushhub_core::error::AppError;
use pushhub_core::result::AppResult;
use pushhub_core::traits::{ElementSource, ElementStatus, ElementType, TableAttribute, Viewer};
use pushhub_core::types::{Condition, SortField};
use pushhub_entity::notification::{Notification, NotificationStatus};

use crate::capabilities::{AppRegistry, PermissionChecker};
use crate::criteria::{columns, NotificationCriteria};
use crate::predicate::status_condition_for_key;
use crate::sources::build_sources;
use crate::table;

/// Default body preview width when no [`ElementConfig`] is supplied.
const DEFAULT_BODY_PREVIEW_WIDTH: usize = 50;

/// The Notification element type as registered with the host admin panel.
pub struct NotificationElementType {
    registry: Arc<dyn AppRegistry>,
    permissions: Arc<dyn PermissionChecker>,
    body_preview_width: usize,
}

impl NotificationElementType {
    /// Create the element type with default display settings.
    pub fn new(registry: Arc<dyn AppRegistry>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            registry,
            permissions,
            body_preview_width: DEFAULT_BODY_PREVIEW_WIDTH,
        }
    }

    /// Create the element type with display settings from configuration.
    pub fn with_config(
        registry: Arc<dyn AppRegistry>,
        permissions: Arc<dyn PermissionChecker>,
        config: &ElementConfig,
    ) -> Self {
        Self {
            registry,
            permissions,
            body_preview_width: config.body_preview_width,
        }
    }
}

#[async_trait]
impl ElementType for NotificationElementType {
    type Element = Notification;
    type Criteria = NotificationCriteria;

    fn name(&self) -> &str {
        "Push Notifications"
    }

    fn has_statuses(&self) -> bool {
        true
    }

    fn statuses(&self) -> Vec<ElementStatus> {
        [NotificationStatus::Sent, NotificationStatus::Pending]
            .into_iter()
            .map(|status| ElementStatus::new(status.as_str(), status.label()))
            .collect()
    }

    fn table_attributes(&self) -> Vec<TableAttribute> {
        table::table_attributes()
    }

    fn default_sort(&self) -> SortField {
        SortField::desc(columns::ID)
    }

    fn status_condition(&self, status: &str, now: DateTime<Utc>) -> AppResult<Condition> {
        status_condition_for_key(status, now)
    }

    async fn sources(&self, viewer: &Viewer) -> AppResult<Vec<ElementSource<Self::Criteria>>> {
        build_sources(self.registry.as_ref(), self.permissions.as_ref(), viewer).await
    }

    async fn table_attribute_value(
        &self,
        element: &Self::Element,
        attribute: &str,
    ) -> AppResult<String> {
        match attribute {
            "title" => Ok(element.title.clone()),
            "body" => Ok(table::display_body(&element.body, self.body_preview_width).into_owned()),
            "command" => {
                let app = self.registry.find_by_id(element.app_id).await?;
                // Fall back to the raw parameter when the app no longer
                // declares the command.
                Ok(app
                    .as_ref()
                    .and_then(|app| app.command_label(&element.command))
                    .unwrap_or(&element.command)
                    .to_string())
            }
            "schedule" => Ok(table::display_schedule(element.schedule)),
            other => Err(AppError::validation(format!(
                "Unknown table attribute: '{other}'"
            ))),
        }
    }
}
