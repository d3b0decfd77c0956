use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry, MoodOptions};
use crate::services::csv_export::render_csv;
use crate::store::MoodStore;

/// Maximum entries returned by the history listing.
pub const LIST_LIMIT: i64 = 1000;
/// Maximum entries included in a CSV export.
pub const EXPORT_LIMIT: i64 = 10_000;

/// Mood journal operations over an injected store.
#[derive(Clone)]
pub struct MoodService {
    store: Arc<dyn MoodStore>,
}

impl MoodService {
    pub fn new(store: Arc<dyn MoodStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn MoodStore> {
        &self.store
    }

    pub fn list_options(&self) -> MoodOptions {
        MoodOptions
    }

    pub async fn create_entry(&self, req: CreateMoodRequest) -> AppResult<MoodEntry> {
        req.validate()
            .map_err(|_| AppError::Validation("Invalid mood emoji".into()))?;

        let entry = MoodEntry::new(req.mood_emoji, req.mood_name, req.notes);
        let stored = self.store.insert(&entry).await?;

        tracing::info!(entry_id = %stored.id, emoji = %stored.mood_emoji, "Mood entry created");
        Ok(stored)
    }

    pub async fn list_entries(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.store.list_recent(LIST_LIMIT).await?)
    }

    pub async fn delete_entry(&self, id: Uuid) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound("Mood entry not found".into()));
        }

        tracing::info!(entry_id = %id, "Mood entry deleted");
        Ok(())
    }

    pub async fn export_csv(&self) -> AppResult<String> {
        let entries = self.store.list_recent(EXPORT_LIMIT).await?;
        tracing::debug!(rows = entries.len(), "Exporting mood history");
        Ok(render_csv(&entries))
    }
}
