//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pushhub_core::types::{AppId, NotificationId};

use super::status::NotificationStatus;

/// A push notification addressed to one app's devices.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The app this notification belongs to.
    pub app_id: AppId,
    /// Short title shown on the device.
    pub title: String,
    /// Free-text message body.
    pub body: String,
    /// App-defined command parameter (see `App::commands`).
    pub command: String,
    /// Scheduled send date. `None` or a past date means the notification
    /// has already been dispatched.
    pub schedule: Option<DateTime<Utc>>,
    /// When the notification record was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Derive the lifecycle status of this notification at time `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> NotificationStatus {
        NotificationStatus::resolve(self.schedule, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(schedule: Option<DateTime<Utc>>) -> Notification {
        Notification {
            id: NotificationId::new(),
            app_id: AppId::new(),
            title: "Release".to_string(),
            body: "Version 2.0 is out".to_string(),
            command: "open".to_string(),
            schedule,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_at_follows_schedule() {
        let now = "2024-01-01T00:00:00Z".parse().unwrap();
        let later = "2024-06-01T00:00:00Z".parse().unwrap();

        assert_eq!(notification(None).status_at(now), NotificationStatus::Sent);
        assert_eq!(
            notification(Some(later)).status_at(now),
            NotificationStatus::Pending
        );
        assert_eq!(
            notification(Some(now)).status_at(now),
            NotificationStatus::Sent
        );
    }
}
