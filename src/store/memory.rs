use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{MoodStore, StoreError};
use crate::models::mood::MoodEntry;

/// Process-local store. Entries are lost on restart.
#[derive(Default)]
pub struct InMemoryMoodStore {
    entries: RwLock<Vec<MoodEntry>>,
}

impl InMemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl MoodStore for InMemoryMoodStore {
    async fn insert(&self, entry: &MoodEntry) -> Result<MoodEntry, StoreError> {
        self.entries.write().await.push(entry.clone());
        Ok(entry.clone())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<MoodEntry>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let entries = self.entries.read().await;

        // Reverse first so the stable sort keeps later inserts ahead on ties.
        let mut recent: Vec<MoodEntry> = entries.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn entry_at(secs: i64, name: &str) -> MoodEntry {
        let mut entry = MoodEntry::new("🙂".into(), name.into(), None);
        entry.timestamp = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap() + Duration::seconds(secs);
        entry
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first() {
        let store = InMemoryMoodStore::new();
        store.insert(&entry_at(20, "middle")).await.unwrap();
        store.insert(&entry_at(30, "latest")).await.unwrap();
        store.insert(&entry_at(10, "earliest")).await.unwrap();

        let names: Vec<String> = store
            .list_recent(1000)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.mood_name)
            .collect();
        assert_eq!(names, ["latest", "middle", "earliest"]);
    }

    #[tokio::test]
    async fn test_list_recent_ties_prefer_latest_insert() {
        let store = InMemoryMoodStore::new();
        store.insert(&entry_at(0, "first")).await.unwrap();
        store.insert(&entry_at(0, "second")).await.unwrap();

        let recent = store.list_recent(10).await.unwrap();
        assert_eq!(recent[0].mood_name, "second");
        assert_eq!(recent[1].mood_name, "first");
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let store = InMemoryMoodStore::new();
        for i in 0..5 {
            store.insert(&entry_at(i, &format!("e{i}"))).await.unwrap();
        }

        let recent = store.list_recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].mood_name, "e4");
        assert_eq!(recent[1].mood_name, "e3");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let store = InMemoryMoodStore::new();
        let entry = store.insert(&entry_at(0, "gone")).await.unwrap();

        assert!(store.delete(entry.id).await.unwrap());
        assert!(!store.delete(entry.id).await.unwrap());
        assert_eq!(store.len().await, 0);
    }
}
