//! End-to-end tests of the assembled element type through the host-facing
//! [`ElementType`] contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pushhub::{
    App, AppCommand, AppRegistry, ElementType, Notification, PermissionChecker, PushNotifications,
    Viewer,
};
use pushhub_core::config::ElementConfig;
use pushhub_core::error::ErrorKind;
use pushhub_core::result::AppResult;
use pushhub_core::types::{AppId, NotificationId, SortField, UserId};

struct StaticCatalog(Vec<App>);

#[async_trait]
impl AppRegistry for StaticCatalog {
    async fn visible_apps(&self, _viewer: &Viewer) -> AppResult<Vec<App>> {
        Ok(self.0.clone())
    }

    async fn find_by_id(&self, id: AppId) -> AppResult<Option<App>> {
        Ok(self.0.iter().find(|app| app.id == id).cloned())
    }
}

struct AdminFor(UserId);

#[async_trait]
impl PermissionChecker for AdminFor {
    async fn is_admin(&self, viewer: &Viewer) -> AppResult<bool> {
        Ok(viewer.user_id == self.0)
    }
}

fn sample_app() -> App {
    App {
        id: AppId::new(),
        name: "Acme".to_string(),
        handle: "acme".to_string(),
        commands: vec![AppCommand {
            param: "push".to_string(),
            name: "Send Push".to_string(),
        }],
        created_at: Utc::now(),
    }
}

fn assemble(apps: Vec<App>, admin: UserId) -> PushNotifications {
    PushNotifications::assemble(
        Arc::new(StaticCatalog(apps)),
        Arc::new(AdminFor(admin)),
        &ElementConfig::default(),
    )
}

#[test]
fn test_registration_surface() {
    let plugin = assemble(vec![sample_app()], UserId::new());
    let element_type = plugin.element_type();

    assert_eq!(element_type.name(), "Push Notifications");
    assert!(element_type.has_statuses());
    assert_eq!(element_type.default_sort(), SortField::desc("notifications.id"));

    let labels: Vec<_> = element_type
        .table_attributes()
        .into_iter()
        .map(|attr| attr.label)
        .collect();
    assert_eq!(labels, vec!["Title", "Body", "Command", "Send Date"]);
}

#[test]
fn test_status_condition_rejects_unknown_key() {
    let plugin = assemble(vec![sample_app()], UserId::new());
    let now = Utc::now();
    let err = plugin
        .element_type()
        .status_condition("draft", now)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidStatus);
}

#[tokio::test]
async fn test_admin_and_non_admin_source_trees() {
    let app = sample_app();
    let admin = UserId::new();
    let plugin = assemble(vec![app.clone()], admin);
    let element_type = plugin.element_type();

    let admin_sources = element_type.sources(&Viewer::new(admin)).await.unwrap();
    assert!(admin_sources[0].criteria.is_none());
    assert_eq!(admin_sources[1].key, format!("app:{}", app.id));

    let other_sources = element_type
        .sources(&Viewer::new(UserId::new()))
        .await
        .unwrap();
    assert_eq!(
        other_sources[0].criteria.as_ref().unwrap().app_id,
        Some(vec![app.id.into_uuid()])
    );
}

#[tokio::test]
async fn test_table_cells_render_for_display_only() {
    let app = sample_app();
    let plugin = assemble(vec![app.clone()], UserId::new());
    let element_type = plugin.element_type();

    let schedule: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
    let notification = Notification {
        id: NotificationId::new(),
        app_id: app.id,
        title: "Release".to_string(),
        body: "x".repeat(51),
        command: "push".to_string(),
        schedule: Some(schedule),
        created_at: Utc::now(),
    };

    let body = element_type
        .table_attribute_value(&notification, "body")
        .await
        .unwrap();
    assert_eq!(body, format!("{}...", "x".repeat(50)));
    // Truncation is display-only.
    assert_eq!(notification.body.len(), 51);

    let command = element_type
        .table_attribute_value(&notification, "command")
        .await
        .unwrap();
    assert_eq!(command, "Send Push");

    let send_date = element_type
        .table_attribute_value(&notification, "schedule")
        .await
        .unwrap();
    assert_eq!(send_date, "2024-06-01T12:00:00Z");
}
