use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{MoodStore, StoreError};
use crate::models::mood::MoodEntry;

const ENTRY_COLUMNS: &str = "id, mood_emoji, mood_name, notes, created_at";

#[derive(Clone)]
pub struct PgMoodStore {
    pool: PgPool,
}

impl PgMoodStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn insert(&self, entry: &MoodEntry) -> Result<MoodEntry, StoreError> {
        let stored = sqlx::query_as::<_, MoodEntry>(&format!(
            r#"
            INSERT INTO mood_entries (id, mood_emoji, mood_name, notes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(entry.id)
        .bind(&entry.mood_emoji)
        .bind(&entry.mood_name)
        .bind(&entry.notes)
        .bind(entry.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<MoodEntry>, StoreError> {
        let entries = sqlx::query_as::<_, MoodEntry>(&format!(
            r#"
            SELECT {ENTRY_COLUMNS} FROM mood_entries
            ORDER BY created_at DESC, seq DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM mood_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
