//! Admin sidebar source tree.
//!
//! One `"*"` source lists every notification; each visible app contributes
//! an `app:<id>` source restricted to it. Non-admin viewers get the all
//! source restricted to the apps they can access.

use tracing::debug;

use pushhub_core::result::AppResult;
use pushhub_core::traits::{ElementSource, Viewer};

use crate::capabilities::{AppRegistry, PermissionChecker};
use crate::criteria::NotificationCriteria;

/// Build the source tree for the given viewer.
pub async fn build_sources(
    registry: &dyn AppRegistry,
    permissions: &dyn PermissionChecker,
    viewer: &Viewer,
) -> AppResult<Vec<ElementSource<NotificationCriteria>>> {
    let apps = registry.visible_apps(viewer).await?;
    let is_admin = permissions.is_admin(viewer).await?;

    let mut sources = Vec::with_capacity(apps.len() + 1);

    let all_criteria = if is_admin {
        None
    } else {
        Some(NotificationCriteria::for_apps(
            apps.iter().map(|app| app.id.into_uuid()).collect(),
        ))
    };
    sources.push(ElementSource {
        key: "*".to_string(),
        label: "All notifications".to_string(),
        criteria: all_criteria,
    });

    for app in &apps {
        sources.push(ElementSource {
            key: format!("app:{}", app.id),
            label: app.name.clone(),
            criteria: Some(NotificationCriteria::for_apps(vec![app.id.into_uuid()])),
        });
    }

    debug!(
        viewer = %viewer.user_id,
        is_admin,
        sources = sources.len(),
        "Built notification source tree"
    );

    Ok(sources)
}
