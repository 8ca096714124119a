use axum::{extract::State, Json};

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::media::catalog::{self, MediaEntry};

/// GET /api/videos: bare file names, in directory order.
pub async fn list_videos(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let entries = catalog::list(state.media_dir()).await?;
    Ok(Json(entries.into_iter().map(|e| e.name).collect()))
}

/// GET /api/videos/details: names with sizes.
pub async fn list_video_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<MediaEntry>>, AppError> {
    Ok(Json(catalog::list(state.media_dir()).await?))
}
