//! App repository implementation.

use sqlx::PgPool;

use pushhub_core::error::{AppError, ErrorKind};
use pushhub_core::result::AppResult;
use pushhub_core::types::AppId;
use pushhub_entity::app::App;

/// Repository for the app catalog.
#[derive(Debug, Clone)]
pub struct AppRepository {
    pool: PgPool,
    table_prefix: String,
}

impl AppRepository {
    /// Create a new app repository.
    pub fn new(pool: PgPool, table_prefix: impl Into<String>) -> Self {
        Self {
            pool,
            table_prefix: table_prefix.into(),
        }
    }

    fn table(&self) -> String {
        format!("{}apps", self.table_prefix)
    }

    /// List all registered apps in catalog order.
    pub async fn find_all(&self) -> AppResult<Vec<App>> {
        let sql = format!("SELECT * FROM {} ORDER BY name", self.table());
        sqlx::query_as::<_, App>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list apps", e))
    }

    /// Find an app by its identifier.
    pub async fn find_by_id(&self, id: AppId) -> AppResult<Option<App>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.table());
        sqlx::query_as::<_, App>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find app", e))
    }

    /// Find an app by its handle.
    pub async fn find_by_handle(&self, handle: &str) -> AppResult<Option<App>> {
        let sql = format!("SELECT * FROM {} WHERE handle = $1", self.table());
        sqlx::query_as::<_, App>(&sql)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find app", e))
    }

    /// Register an app.
    pub async fn create(&self, app: &App) -> AppResult<App> {
        let sql = format!(
            "INSERT INTO {} (id, name, handle, commands, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
            self.table()
        );
        sqlx::query_as::<_, App>(&sql)
            .bind(app.id)
            .bind(&app.name)
            .bind(&app.handle)
            .bind(sqlx::types::Json(&app.commands))
            .bind(app.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create app", e))
    }
}
