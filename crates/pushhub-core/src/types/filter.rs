//! Filter predicate types for dynamic query building.
//!
//! A [`Condition`] is a boolean predicate over element attributes. The host
//! query layer composes conditions with `AND`/`OR` grouping and renders them
//! into its own query dialect; nothing in this module touches a database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// SQL `LIKE` pattern match.
    Like,
    /// SQL `IN` list membership.
    In,
    /// SQL `IS NULL` check.
    IsNull,
    /// SQL `IS NOT NULL` check.
    IsNotNull,
}

/// A dynamic filter value.
///
/// Timestamps use chrono's RFC 3339 UTC serialization; this is the single
/// canonical wire format for schedule values exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// A UTC timestamp value.
    Timestamp(DateTime<Utc>),
    /// A UUID value.
    Uuid(Uuid),
    /// A list of string values (for `IN`).
    StringList(Vec<String>),
    /// A list of UUID values (for `IN`).
    UuidList(Vec<Uuid>),
    /// Null / no value (for `IS NULL`, `IS NOT NULL`).
    Null,
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The column or field name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Shorthand for a string equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::String(value.into()))
    }

    /// Shorthand for an `IS NULL` filter.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOp::IsNull, FilterValue::Null)
    }

    /// Shorthand for a timestamp comparison filter.
    pub fn at(field: impl Into<String>, op: FilterOp, at: DateTime<Utc>) -> Self {
        Self::new(field, op, FilterValue::Timestamp(at))
    }

    /// Shorthand for a UUID-list membership filter.
    pub fn id_in(field: impl Into<String>, ids: Vec<Uuid>) -> Self {
        Self::new(field, FilterOp::In, FilterValue::UuidList(ids))
    }
}

/// A composable boolean predicate over element attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// A single field comparison.
    Field(FilterField),
    /// All sub-conditions must hold.
    And(Vec<Condition>),
    /// At least one sub-condition must hold.
    Or(Vec<Condition>),
}

impl Condition {
    /// Wrap a single field comparison.
    pub fn field(field: FilterField) -> Self {
        Self::Field(field)
    }

    /// Conjunction of conditions. A single-element list collapses to the
    /// inner condition.
    pub fn all(mut conditions: Vec<Condition>) -> Self {
        if conditions.len() == 1 {
            conditions.remove(0)
        } else {
            Self::And(conditions)
        }
    }

    /// Disjunction of conditions. A single-element list collapses to the
    /// inner condition.
    pub fn any(mut conditions: Vec<Condition>) -> Self {
        if conditions.len() == 1 {
            conditions.remove(0)
        } else {
            Self::Or(conditions)
        }
    }
}

impl From<FilterField> for Condition {
    fn from(field: FilterField) -> Self {
        Self::Field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_collapses_single_condition() {
        let field = FilterField::eq("notifications.command", "push");
        let condition = Condition::all(vec![field.clone().into()]);
        assert_eq!(condition, Condition::Field(field));
    }

    #[test]
    fn test_any_keeps_groups() {
        let condition = Condition::any(vec![
            FilterField::is_null("notifications.schedule").into(),
            FilterField::at("notifications.schedule", FilterOp::Lte, Utc::now()).into(),
        ]);
        assert!(matches!(condition, Condition::Or(ref inner) if inner.len() == 2));
    }

    #[test]
    fn test_timestamp_value_serializes_as_rfc3339() {
        let at = "2024-01-01T00:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("parse timestamp");
        let json = serde_json::to_string(&FilterValue::Timestamp(at)).expect("serialize");
        assert_eq!(json, "\"2024-01-01T00:00:00Z\"");
    }
}
