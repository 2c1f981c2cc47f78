//! Status filter predicates.
//!
//! Translates a [`NotificationStatus`] into a [`Condition`] over the
//! `schedule` column that agrees with [`NotificationStatus::resolve`]:
//! filtering by a status and re-resolving each matching row at the same
//! `now` always yields that status.

use chrono::{DateTime, Utc};

use pushhub_core::result::AppResult;
use pushhub_core::types::{Condition, FilterField, FilterOp};
use pushhub_entity::notification::NotificationStatus;

use crate::criteria::columns;

/// Build the schedule predicate equivalent to `status` at time `now`.
pub fn status_condition(status: NotificationStatus, now: DateTime<Utc>) -> Condition {
    match status {
        // No schedule, or a schedule at/before now.
        NotificationStatus::Sent => Condition::any(vec![
            FilterField::is_null(columns::SCHEDULE).into(),
            FilterField::at(columns::SCHEDULE, FilterOp::Lte, now).into(),
        ]),
        NotificationStatus::Pending => {
            FilterField::at(columns::SCHEDULE, FilterOp::Gt, now).into()
        }
    }
}

/// Parse a host-supplied status key and build its predicate.
///
/// Unknown keys fail with an invalid-status error.
pub fn status_condition_for_key(key: &str, now: DateTime<Utc>) -> AppResult<Condition> {
    let status: NotificationStatus = key.parse()?;
    Ok(status_condition(status, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushhub_core::error::ErrorKind;
    use pushhub_core::types::FilterValue;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_sent_condition_is_null_or_lte_now() {
        let now = at("2024-01-01T00:00:00Z");
        let condition = status_condition(NotificationStatus::Sent, now);

        let Condition::Or(parts) = condition else {
            panic!("expected OR group");
        };
        assert_eq!(
            parts[0],
            Condition::Field(FilterField::is_null("notifications.schedule"))
        );
        assert_eq!(
            parts[1],
            Condition::Field(FilterField::new(
                "notifications.schedule",
                FilterOp::Lte,
                FilterValue::Timestamp(now),
            ))
        );
    }

    #[test]
    fn test_pending_condition_is_gt_now() {
        let now = at("2024-01-01T00:00:00Z");
        let condition = status_condition(NotificationStatus::Pending, now);
        assert_eq!(
            condition,
            Condition::Field(FilterField::new(
                "notifications.schedule",
                FilterOp::Gt,
                FilterValue::Timestamp(now),
            ))
        );
    }

    #[test]
    fn test_unknown_status_key_is_rejected() {
        let err = status_condition_for_key("draft", at("2024-01-01T00:00:00Z")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidStatus);
    }
}
