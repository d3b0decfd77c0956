use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::dto::MessageResponse;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry, MoodOptions};
use crate::AppState;

pub const EXPORT_FILENAME: &str = "mood_history.csv";

pub async fn list_options(State(state): State<AppState>) -> Json<MoodOptions> {
    Json(state.moods.list_options())
}

pub async fn create_mood(
    State(state): State<AppState>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    let entry = state.moods.create_entry(body).await?;
    Ok(Json(entry))
}

pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.moods.list_entries().await?;
    Ok(Json(entries))
}

pub async fn export_moods(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = state.moods.export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILENAME}"),
            ),
        ],
        csv,
    ))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Path(mood_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    // An id that is not a UUID can never match a stored entry.
    let id = Uuid::parse_str(&mood_id)
        .map_err(|_| AppError::NotFound("Mood entry not found".into()))?;

    state.moods.delete_entry(id).await?;
    Ok(Json(MessageResponse::new("Mood entry deleted successfully")))
}
