//! # pushhub
//!
//! Assembly crate for the Push Notifications element type. Wires the
//! database-backed app catalog and notification repository to the element
//! type and exposes the pieces a host admin panel registers.

pub mod logging;
pub mod plugin;
pub mod registry;

pub use plugin::PushNotifications;
pub use registry::CatalogRegistry;

pub use pushhub_core::config::{AppConfig, ElementConfig};
pub use pushhub_core::traits::{ElementType, Viewer};
pub use pushhub_core::{AppError, AppResult};
pub use pushhub_element::{
    AppRegistry, NotificationCriteria, NotificationElementType, PermissionChecker,
};
pub use pushhub_entity::app::{App, AppCommand};
pub use pushhub_entity::notification::{Notification, NotificationStatus};
