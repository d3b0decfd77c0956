//! # Mood storage port
//!
//! `MoodService` talks to persistence only through [`MoodStore`], so the
//! binary can run against Postgres in production and an in-memory store in
//! development and tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::mood::MoodEntry;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryMoodStore;
pub use postgres::PgMoodStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Persistence contract for mood entries.
#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Persists a new entry and returns it as stored.
    async fn insert(&self, entry: &MoodEntry) -> Result<MoodEntry, StoreError>;

    /// Newest entries first, at most `limit` of them.
    async fn list_recent(&self, limit: i64) -> Result<Vec<MoodEntry>, StoreError>;

    /// Removes the entry with `id`. Returns `false` when nothing matched.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    async fn close(&self);
}
