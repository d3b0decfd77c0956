use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Accepted mood symbols and their canonical labels, in display order.
pub const MOOD_OPTIONS: [(&str, &str); 10] = [
    ("😄", "Very Happy"),
    ("😊", "Happy"),
    ("🙂", "Content"),
    ("😐", "Neutral"),
    ("😞", "Sad"),
    ("😢", "Very Sad"),
    ("😡", "Angry"),
    ("😰", "Anxious"),
    ("🤗", "Excited"),
    ("😴", "Tired"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood_emoji: String,
    pub mood_name: String,
    pub notes: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Builds a fresh entry stamped with the current time.
    pub fn new(mood_emoji: String, mood_name: String, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood_emoji,
            mood_name,
            notes: notes.unwrap_or_default(),
            timestamp: Utc::now(),
        }
    }
}

/// POST /api/moods
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodRequest {
    #[validate(custom = "validate_mood_emoji")]
    pub mood_emoji: String,

    /// Not reconciled with the emoji's canonical label.
    pub mood_name: String,

    #[serde(default)]
    pub notes: Option<String>,
}

pub fn is_known_emoji(emoji: &str) -> bool {
    MOOD_OPTIONS.iter().any(|(e, _)| *e == emoji)
}

fn validate_mood_emoji(emoji: &str) -> Result<(), ValidationError> {
    if is_known_emoji(emoji) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_mood_emoji"))
    }
}

/// The fixed emoji → label mapping, serialized as a JSON object that keeps
/// the order of [`MOOD_OPTIONS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodOptions;

impl MoodOptions {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        MOOD_OPTIONS.iter().copied()
    }

    pub fn len(&self) -> usize {
        MOOD_OPTIONS.len()
    }
}

impl Serialize for MoodOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (emoji, label) in self.iter() {
            map.serialize_entry(emoji, label)?;
        }
        map.end()
    }
}
