//! Round-trip tests between status resolution and status filter
//! predicates: a schedule satisfies the predicate for a status at time
//! `now` exactly when resolving the schedule at `now` yields that status.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use pushhub::NotificationStatus;
use pushhub_core::types::{Condition, FilterOp, FilterValue};
use pushhub_element::predicate::status_condition;

/// Interpret a schedule-only condition against a single schedule value.
fn matches(condition: &Condition, schedule: Option<DateTime<Utc>>) -> bool {
    match condition {
        Condition::And(parts) => parts.iter().all(|part| matches(part, schedule)),
        Condition::Or(parts) => parts.iter().any(|part| matches(part, schedule)),
        Condition::Field(field) => {
            assert_eq!(field.field, "notifications.schedule");
            match (field.op, &field.value) {
                (FilterOp::IsNull, _) => schedule.is_none(),
                (FilterOp::Lte, FilterValue::Timestamp(at)) => {
                    schedule.is_some_and(|s| s <= *at)
                }
                (FilterOp::Gt, FilterValue::Timestamp(at)) => schedule.is_some_and(|s| s > *at),
                other => panic!("unexpected schedule predicate: {other:?}"),
            }
        }
    }
}

fn base_now() -> DateTime<Utc> {
    "2024-01-01T00:00:00Z".parse().expect("valid timestamp")
}

proptest! {
    #[test]
    fn prop_predicate_agrees_with_resolver(
        schedule_offset_seconds in proptest::option::of(-1_000_000_000i64..1_000_000_000i64),
        now_offset_seconds in -1_000_000i64..1_000_000i64,
    ) {
        let now = base_now() + Duration::seconds(now_offset_seconds);
        let schedule = schedule_offset_seconds.map(|s| base_now() + Duration::seconds(s));

        let resolved = NotificationStatus::resolve(schedule, now);
        for status in [NotificationStatus::Sent, NotificationStatus::Pending] {
            let condition = status_condition(status, now);
            prop_assert_eq!(matches(&condition, schedule), resolved == status);
        }
    }
}

#[test]
fn test_unscheduled_notification_is_sent() {
    let now = "2024-01-01T00:00:00Z".parse().unwrap();
    assert_eq!(
        NotificationStatus::resolve(None, now),
        NotificationStatus::Sent
    );
    assert!(matches(
        &status_condition(NotificationStatus::Sent, now),
        None
    ));
}

#[test]
fn test_future_schedule_is_pending() {
    let now = "2023-12-31T23:59:59Z".parse().unwrap();
    let schedule = Some("2024-01-01T00:00:00Z".parse().unwrap());
    assert_eq!(
        NotificationStatus::resolve(schedule, now),
        NotificationStatus::Pending
    );
    assert!(matches(
        &status_condition(NotificationStatus::Pending, now),
        schedule
    ));
    assert!(!matches(
        &status_condition(NotificationStatus::Sent, now),
        schedule
    ));
}

#[test]
fn test_schedule_equal_to_now_counts_as_sent() {
    let now: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
    assert_eq!(
        NotificationStatus::resolve(Some(now), now),
        NotificationStatus::Sent
    );
    assert!(matches(
        &status_condition(NotificationStatus::Sent, now),
        Some(now)
    ));
}
