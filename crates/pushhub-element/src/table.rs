//! Table-view display helpers.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};

use pushhub_core::traits::TableAttribute;

/// Ellipsis marker appended to truncated bodies.
const ELLIPSIS: &str = "...";

/// The columns shown in notification table views.
pub fn table_attributes() -> Vec<TableAttribute> {
    vec![
        TableAttribute::new("title", "Title"),
        TableAttribute::new("body", "Body"),
        TableAttribute::new("command", "Command"),
        TableAttribute::new("schedule", "Send Date"),
    ]
}

/// Truncate a body for display.
///
/// Bodies longer than `width` characters are cut to `width` and suffixed
/// with an ellipsis marker; shorter bodies are returned unchanged. Display
/// only — the underlying value is never mutated.
pub fn display_body(body: &str, width: usize) -> Cow<'_, str> {
    match body.char_indices().nth(width) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len());
            preview.push_str(&body[..cut]);
            preview.push_str(ELLIPSIS);
            Cow::Owned(preview)
        }
        None => Cow::Borrowed(body),
    }
}

/// Render a schedule for display: RFC 3339 UTC, or empty when unscheduled.
pub fn display_schedule(schedule: Option<DateTime<Utc>>) -> String {
    schedule
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_body_at_width_is_unchanged() {
        let body = "a".repeat(50);
        assert_eq!(display_body(&body, 50), body.as_str());
        assert!(matches!(display_body(&body, 50), Cow::Borrowed(_)));
    }

    #[test]
    fn test_display_body_over_width_is_truncated() {
        let body = "a".repeat(51);
        let shown = display_body(&body, 50);
        assert_eq!(shown.len(), 53);
        assert_eq!(shown, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_display_body_respects_char_boundaries() {
        let body = "é".repeat(60);
        let shown = display_body(&body, 50);
        assert_eq!(shown, format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn test_display_schedule_formats_utc() {
        let at = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(display_schedule(Some(at)), "2024-01-01T00:00:00Z");
        assert_eq!(display_schedule(None), "");
    }

    #[test]
    fn test_table_attributes_order() {
        let keys: Vec<_> = table_attributes().into_iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["title", "body", "command", "schedule"]);
    }
}
