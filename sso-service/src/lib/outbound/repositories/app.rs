use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::identity::errors::StorageError;
use crate::domain::identity::models::App;
use crate::domain::identity::models::AppId;
use crate::domain::identity::ports::AppRepository;

/// Read-only view of the apps table. Apps are provisioned by migrations.
pub struct SqliteAppRepository {
    pool: SqlitePool,
}

impl SqliteAppRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: String,
}

#[async_trait]
impl AppRepository for SqliteAppRepository {
    async fn find_by_id(&self, id: AppId) -> Result<App, StorageError> {
        sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
        .map(|row| App::new(AppId(row.id), row.name, row.secret))
        .ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::Executor;

    use super::*;
    use crate::outbound::storage;

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = storage::connect_in_memory().await.unwrap();
        storage::migrate(&pool).await.unwrap();
        pool.execute("INSERT INTO apps (id, name, secret) VALUES (7, 'billing', 'billing-secret')")
            .await
            .unwrap();

        let repository = SqliteAppRepository::new(pool);

        let app = repository.find_by_id(AppId(7)).await.unwrap();
        assert_eq!(app.id, AppId(7));
        assert_eq!(app.name, "billing");
        assert_eq!(app.signing_key(), b"billing-secret");

        let missing = repository.find_by_id(AppId(8)).await;
        assert!(matches!(missing, Err(StorageError::NotFound)));
    }
}
