//! SQLite Kitten Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{KittenRecord, KittenRepositoryPort, NewKitten, RepositoryError};

/// SQLite Kitten Repository
pub struct SqliteKittenRepository {
    pool: DbPool,
}

impl SqliteKittenRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct KittenRow {
    id: i64,
    name: String,
    age: i64,
    color: String,
    owner_id: i64,
    created_at: String,
}

impl TryFrom<KittenRow> for KittenRecord {
    type Error = RepositoryError;

    fn try_from(row: KittenRow) -> Result<Self, Self::Error> {
        Ok(KittenRecord {
            id: row.id,
            name: row.name,
            age: row.age,
            color: row.color,
            owner_id: row.owner_id,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl KittenRepositoryPort for SqliteKittenRepository {
    async fn create(&self, kitten: &NewKitten) -> Result<KittenRecord, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO kittens (name, age, color, owner_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&kitten.name)
        .bind(kitten.age)
        .bind(&kitten.color)
        .bind(kitten.owner_id)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::NotFound(format!("owner {} does not exist", kitten.owner_id))
            }
            _ => RepositoryError::DatabaseError(e.to_string()),
        })?;

        Ok(KittenRecord {
            id: result.last_insert_rowid(),
            name: kitten.name.clone(),
            age: kitten.age,
            color: kitten.color.clone(),
            owner_id: kitten.owner_id,
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<KittenRecord>, RepositoryError> {
        let row: Option<KittenRow> = sqlx::query_as(
            "SELECT id, name, age, color, owner_id, created_at FROM kittens WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(KittenRecord::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM kittens WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewUser, UserRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
    };

    async fn setup() -> (SqliteKittenRepository, i64) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let owner = SqliteUserRepository::new(pool.clone())
            .create(&NewUser {
                username: "owner".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        (SqliteKittenRepository::new(pool), owner.id)
    }

    fn new_kitten(owner_id: i64) -> NewKitten {
        NewKitten {
            name: "Tom".to_string(),
            age: 3,
            color: "grey".to_string(),
            owner_id,
        }
    }

    #[tokio::test]
    async fn test_create_find_delete() {
        let (repo, owner_id) = setup().await;

        let created = repo.create(&new_kitten(owner_id)).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Tom");
        assert_eq!(found.age, 3);
        assert_eq!(found.owner_id, owner_id);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_owner_rejected() {
        let (repo, owner_id) = setup().await;
        let err = repo.create(&new_kitten(owner_id + 100)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
