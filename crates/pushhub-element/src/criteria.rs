//! Notification list criteria.
//!
//! A [`NotificationCriteria`] captures every attribute the host can filter
//! notifications by. [`NotificationCriteria::conditions`] turns the set
//! fields into `AND`-joined predicates for the query layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pushhub_core::result::AppResult;
use pushhub_core::types::{Condition, FilterField, FilterOp, FilterValue, SortField};

use crate::predicate::status_condition_for_key;

/// Qualified column names used in criteria predicates. The repository
/// aliases the plugin tables to match (`... AS notifications`).
pub mod columns {
    /// Notification primary key.
    pub const ID: &str = "notifications.id";
    /// Owning app foreign key.
    pub const APP_ID: &str = "notifications.app_id";
    /// Notification title.
    pub const TITLE: &str = "notifications.title";
    /// Notification body.
    pub const BODY: &str = "notifications.body";
    /// Command parameter.
    pub const COMMAND: &str = "notifications.command";
    /// Scheduled send date.
    pub const SCHEDULE: &str = "notifications.schedule";
    /// App handle (requires the apps join).
    pub const APP_HANDLE: &str = "apps.handle";
}

/// A comparison filter on the schedule attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFilter {
    /// Comparison operator.
    pub op: FilterOp,
    /// Timestamp to compare against.
    pub at: DateTime<Utc>,
}

impl ScheduleFilter {
    /// Notifications scheduled at or after the given time.
    pub fn on_or_after(at: DateTime<Utc>) -> Self {
        Self {
            op: FilterOp::Gte,
            at,
        }
    }

    /// Notifications scheduled before the given time.
    pub fn before(at: DateTime<Utc>) -> Self {
        Self {
            op: FilterOp::Lt,
            at,
        }
    }
}

/// Criteria for listing notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationCriteria {
    /// Filter by app handle (joins the apps table).
    pub app: Option<String>,
    /// Filter by one or more owning app IDs.
    pub app_id: Option<Vec<Uuid>>,
    /// Filter by exact title.
    pub title: Option<String>,
    /// Filter by exact body.
    pub body: Option<String>,
    /// Filter by command parameter.
    pub command: Option<String>,
    /// Filter by schedule comparison.
    pub schedule: Option<ScheduleFilter>,
    /// Filter by status key (`"sent"` or `"pending"`).
    pub status: Option<String>,
    /// Result ordering.
    pub order: SortField,
}

impl Default for NotificationCriteria {
    fn default() -> Self {
        Self {
            app: None,
            app_id: None,
            title: None,
            body: None,
            command: None,
            schedule: None,
            status: None,
            order: SortField::desc(columns::ID),
        }
    }
}

impl NotificationCriteria {
    /// Criteria restricted to the given apps.
    pub fn for_apps(app_ids: Vec<Uuid>) -> Self {
        Self {
            app_id: Some(app_ids),
            ..Self::default()
        }
    }

    /// Whether resolving these criteria requires joining the apps table.
    pub fn joins_apps(&self) -> bool {
        self.app.is_some()
    }

    /// Build the `AND`-joined predicates for the set fields.
    ///
    /// `now` anchors status resolution; an unknown status key fails with
    /// an invalid-status error.
    pub fn conditions(&self, now: DateTime<Utc>) -> AppResult<Vec<Condition>> {
        let mut conditions = Vec::new();

        if let Some(app_ids) = &self.app_id {
            conditions.push(match app_ids.as_slice() {
                [id] => FilterField::new(columns::APP_ID, FilterOp::Eq, FilterValue::Uuid(*id))
                    .into(),
                _ => FilterField::id_in(columns::APP_ID, app_ids.clone()).into(),
            });
        }

        if let Some(handle) = &self.app {
            conditions.push(FilterField::eq(columns::APP_HANDLE, handle.clone()).into());
        }

        if let Some(title) = &self.title {
            conditions.push(FilterField::eq(columns::TITLE, title.clone()).into());
        }

        if let Some(body) = &self.body {
            conditions.push(FilterField::eq(columns::BODY, body.clone()).into());
        }

        if let Some(command) = &self.command {
            conditions.push(FilterField::eq(columns::COMMAND, command.clone()).into());
        }

        if let Some(schedule) = &self.schedule {
            conditions.push(FilterField::at(columns::SCHEDULE, schedule.op, schedule.at).into());
        }

        if let Some(status) = &self.status {
            conditions.push(status_condition_for_key(status, now)?);
        }

        Ok(conditions)
    }
}
