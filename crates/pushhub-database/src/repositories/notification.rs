//! Notification repository implementation.
//!
//! List queries are driven by [`NotificationCriteria`]: the criteria's
//! conditions are rendered to a parameterized `WHERE` clause, and filtering
//! by app handle joins the apps table. Table names carry the configured
//! prefix and are aliased to match the criteria's column constants.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use pushhub_core::error::{AppError, ErrorKind};
use pushhub_core::result::AppResult;
use pushhub_core::types::{NotificationId, PageRequest, PageResponse};
use pushhub_element::criteria::NotificationCriteria;
use pushhub_entity::notification::Notification;

use crate::bind_values;
use crate::query::render_conditions;

/// Repository for notification records.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
    table_prefix: String,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool, table_prefix: impl Into<String>) -> Self {
        Self {
            pool,
            table_prefix: table_prefix.into(),
        }
    }

    fn from_clause(&self, joins_apps: bool) -> String {
        let mut clause = format!("FROM {}notifications AS notifications", self.table_prefix);
        if joins_apps {
            clause.push_str(&format!(
                " JOIN {}apps AS apps ON apps.id = notifications.app_id",
                self.table_prefix
            ));
        }
        clause
    }

    /// List notifications matching the criteria, resolved at time `now`.
    pub async fn find(
        &self,
        criteria: &NotificationCriteria,
        now: DateTime<Utc>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let conditions = criteria.conditions(now)?;
        let fragment = render_conditions(&conditions, 1)?;
        let from_clause = self.from_clause(criteria.joins_apps());
        let where_clause = if fragment.sql.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", fragment.sql)
        };

        let count_sql = format!("SELECT COUNT(*) {from_clause}{where_clause}");
        let total: i64 = bind_values!(
            sqlx::query_scalar::<_, i64>(&count_sql),
            fragment.binds.iter().cloned()
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
        })?;

        let limit_placeholder = fragment.binds.len() + 1;
        let offset_placeholder = limit_placeholder + 1;
        let select_sql = format!(
            "SELECT notifications.* {from_clause}{where_clause} \
             ORDER BY {} {} LIMIT ${limit_placeholder} OFFSET ${offset_placeholder}",
            criteria.order.field,
            criteria.order.direction.as_sql(),
        );
        debug!(sql = %select_sql, "Listing notifications");

        let notifications = bind_values!(
            sqlx::query_as::<_, Notification>(&select_sql),
            fragment.binds
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifications,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a notification by its identifier.
    pub async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        let sql = format!(
            "SELECT * FROM {}notifications WHERE id = $1",
            self.table_prefix
        );
        sqlx::query_as::<_, Notification>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// Create a notification record.
    pub async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        let sql = format!(
            "INSERT INTO {}notifications (id, app_id, title, body, command, schedule, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
            self.table_prefix
        );
        sqlx::query_as::<_, Notification>(&sql)
            .bind(notification.id)
            .bind(notification.app_id)
            .bind(&notification.title)
            .bind(&notification.body)
            .bind(&notification.command)
            .bind(notification.schedule)
            .bind(notification.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
            })
    }

    /// Delete a notification. Returns `true` if a record was removed.
    pub async fn delete(&self, id: NotificationId) -> AppResult<bool> {
        let sql = format!(
            "DELETE FROM {}notifications WHERE id = $1",
            self.table_prefix
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
