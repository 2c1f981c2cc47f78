//! Notification status enumeration and resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a notification.
///
/// Status is never persisted; it is a pure function of the schedule
/// timestamp compared to a caller-supplied `now`. Two evaluations at
/// different times may observe different statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Dispatched: no schedule, or the schedule has passed.
    Sent,
    /// Queued for a future send date.
    Pending,
}

impl NotificationStatus {
    /// Resolve the status of a schedule timestamp at time `now`.
    ///
    /// An absent schedule or one at/before `now` resolves to [`Self::Sent`];
    /// only a strictly future schedule is [`Self::Pending`]. Total over all
    /// inputs.
    pub fn resolve(schedule: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match schedule {
            Some(at) if at > now => Self::Pending,
            _ => Self::Sent,
        }
    }

    /// Return the status as a lowercase string key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Pending => "pending",
        }
    }

    /// Human-readable label for the host's status filter menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationStatus {
    type Err = pushhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "pending" => Ok(Self::Pending),
            _ => Err(pushhub_core::AppError::invalid_status(format!(
                "Invalid notification status: '{s}'. Expected one of: sent, pending"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushhub_core::error::ErrorKind;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_resolve_no_schedule_is_sent() {
        let now = at("2024-01-01T00:00:00Z");
        assert_eq!(NotificationStatus::resolve(None, now), NotificationStatus::Sent);
    }

    #[test]
    fn test_resolve_past_schedule_is_sent() {
        let now = at("2024-01-01T00:00:00Z");
        let schedule = Some(at("2023-06-15T12:30:00Z"));
        assert_eq!(
            NotificationStatus::resolve(schedule, now),
            NotificationStatus::Sent
        );
    }

    #[test]
    fn test_resolve_future_schedule_is_pending() {
        let now = at("2023-12-31T23:59:59Z");
        let schedule = Some(at("2024-01-01T00:00:00Z"));
        assert_eq!(
            NotificationStatus::resolve(schedule, now),
            NotificationStatus::Pending
        );
    }

    #[test]
    fn test_resolve_boundary_schedule_equal_now_is_sent() {
        let now = at("2024-01-01T00:00:00Z");
        assert_eq!(
            NotificationStatus::resolve(Some(now), now),
            NotificationStatus::Sent
        );
    }

    #[test]
    fn test_from_str_known_keys() {
        assert_eq!(
            "sent".parse::<NotificationStatus>().unwrap(),
            NotificationStatus::Sent
        );
        assert_eq!(
            "pending".parse::<NotificationStatus>().unwrap(),
            NotificationStatus::Pending
        );
    }

    #[test]
    fn test_from_str_unknown_key_is_invalid_status() {
        let err = "archived".parse::<NotificationStatus>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidStatus);
    }
}
