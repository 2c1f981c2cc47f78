//! SQL rendering of filter conditions.
//!
//! Turns [`Condition`] trees into parameterized PostgreSQL `WHERE` text
//! with numbered placeholders plus the flat list of values to bind, in
//! placeholder order. Field names come from code-side constants, never from
//! user input; all user-supplied values go through binds.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use pushhub_core::error::AppError;
use pushhub_core::result::AppResult;
use pushhub_core::types::{Condition, FilterField, FilterOp, FilterValue};

/// A scalar value ready to bind to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// A string bind.
    String(String),
    /// A UTC timestamp bind.
    Timestamp(DateTime<Utc>),
    /// A UUID bind.
    Uuid(Uuid),
}

/// Rendered SQL text plus its bind values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    /// The `WHERE` clause body (empty when there are no conditions).
    pub sql: String,
    /// Values for the placeholders, flattened (list filters expand to one
    /// bind per element).
    pub binds: Vec<BindValue>,
}

/// Render `AND`-joined conditions. Placeholders start at
/// `first_placeholder` so the caller can reserve earlier numbers.
pub fn render_conditions(
    conditions: &[Condition],
    first_placeholder: usize,
) -> AppResult<SqlFragment> {
    let mut next = first_placeholder;
    let mut binds = Vec::new();
    let mut parts = Vec::with_capacity(conditions.len());
    for condition in conditions {
        parts.push(render(condition, &mut next, &mut binds)?);
    }
    Ok(SqlFragment {
        sql: parts.join(" AND "),
        binds,
    })
}

/// Render a single condition tree.
pub fn render_condition(condition: &Condition, first_placeholder: usize) -> AppResult<SqlFragment> {
    let mut next = first_placeholder;
    let mut binds = Vec::new();
    let sql = render(condition, &mut next, &mut binds)?;
    Ok(SqlFragment { sql, binds })
}

fn render(
    condition: &Condition,
    next: &mut usize,
    binds: &mut Vec<BindValue>,
) -> AppResult<String> {
    match condition {
        Condition::Field(field) => render_field(field, next, binds),
        Condition::And(parts) if parts.is_empty() => Ok("TRUE".to_string()),
        Condition::Or(parts) if parts.is_empty() => Ok("FALSE".to_string()),
        Condition::And(parts) => render_group(parts, " AND ", next, binds),
        Condition::Or(parts) => render_group(parts, " OR ", next, binds),
    }
}

fn render_group(
    parts: &[Condition],
    joiner: &str,
    next: &mut usize,
    binds: &mut Vec<BindValue>,
) -> AppResult<String> {
    let rendered = parts
        .iter()
        .map(|part| render(part, next, binds))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(format!("({})", rendered.join(joiner)))
}

fn render_field(
    field: &FilterField,
    next: &mut usize,
    binds: &mut Vec<BindValue>,
) -> AppResult<String> {
    match field.op {
        FilterOp::IsNull => Ok(format!("{} IS NULL", field.field)),
        FilterOp::IsNotNull => Ok(format!("{} IS NOT NULL", field.field)),
        FilterOp::In => render_in(field, next, binds),
        op => {
            let bind = scalar_bind(&field.value).ok_or_else(|| {
                AppError::internal(format!(
                    "Non-scalar value for comparison on '{}'",
                    field.field
                ))
            })?;
            binds.push(bind);
            let placeholder = take_placeholder(next);
            Ok(format!(
                "{} {} ${placeholder}",
                field.field,
                comparison_sql(op)
            ))
        }
    }
}

fn render_in(
    field: &FilterField,
    next: &mut usize,
    binds: &mut Vec<BindValue>,
) -> AppResult<String> {
    let values: Vec<BindValue> = match &field.value {
        FilterValue::StringList(values) => {
            values.iter().cloned().map(BindValue::String).collect()
        }
        FilterValue::UuidList(ids) => ids.iter().copied().map(BindValue::Uuid).collect(),
        _ => {
            return Err(AppError::internal(format!(
                "IN filter on '{}' requires a list value",
                field.field
            )));
        }
    };

    // An empty membership list matches nothing.
    if values.is_empty() {
        return Ok("FALSE".to_string());
    }

    let placeholders: Vec<String> = values
        .iter()
        .map(|_| format!("${}", take_placeholder(next)))
        .collect();
    binds.extend(values);
    Ok(format!("{} IN ({})", field.field, placeholders.join(", ")))
}

fn scalar_bind(value: &FilterValue) -> Option<BindValue> {
    match value {
        FilterValue::String(v) => Some(BindValue::String(v.clone())),
        FilterValue::Timestamp(at) => Some(BindValue::Timestamp(*at)),
        FilterValue::Uuid(id) => Some(BindValue::Uuid(*id)),
        FilterValue::StringList(_) | FilterValue::UuidList(_) | FilterValue::Null => None,
    }
}

fn comparison_sql(op: FilterOp) -> &'static str {
    match op {
        FilterOp::Eq => "=",
        FilterOp::Ne => "<>",
        FilterOp::Gt => ">",
        FilterOp::Gte => ">=",
        FilterOp::Lt => "<",
        FilterOp::Lte => "<=",
        FilterOp::Like => "LIKE",
        // Handled before reaching here.
        FilterOp::In | FilterOp::IsNull | FilterOp::IsNotNull => unreachable!(),
    }
}

fn take_placeholder(next: &mut usize) -> usize {
    let current = *next;
    *next += 1;
    current
}

/// Bind a [`SqlFragment`]'s values onto a sqlx query in placeholder order.
#[macro_export]
macro_rules! bind_values {
    ($query:expr, $binds:expr) => {{
        let mut query = $query;
        for value in $binds {
            query = match value {
                $crate::query::BindValue::String(v) => query.bind(v),
                $crate::query::BindValue::Timestamp(v) => query.bind(v),
                $crate::query::BindValue::Uuid(v) => query.bind(v),
            };
        }
        query
    }};
}
