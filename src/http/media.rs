use std::path::PathBuf;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::http::stream;
use crate::media::{mime, safe_path};
use crate::range::{self, ResolvedRange};

/// A requested video after path confinement and range resolution, before any
/// bytes are read.
struct Target {
    path: PathBuf,
    total: u64,
    content_type: &'static str,
    range: Option<ResolvedRange>,
}

/// Shared by GET and HEAD: confine the name to the media root, stat it, and
/// interpret the Range header against its size.
async fn resolve_target(
    state: &AppState,
    filename: &str,
    req_headers: &HeaderMap,
) -> Result<Target, AppError> {
    let Some(path) = safe_path::resolve_in_root(state.media_dir(), filename).await else {
        tracing::info!("Video not found: {:?}", filename);
        return Err(AppError::NotFound);
    };

    let metadata = tokio::fs::metadata(&path).await.map_err(|e| {
        tracing::debug!("Cannot stat {}: {}", path.display(), e);
        AppError::NotFound
    })?;
    if !metadata.is_file() {
        return Err(AppError::NotFound);
    }
    let total = metadata.len();

    let range = match req_headers.get(header::RANGE) {
        None => None,
        Some(value) => {
            // Non-ASCII header bytes cannot be a valid byte range
            let raw = value
                .to_str()
                .map_err(|_| AppError::InvalidRange { total })?;
            let resolved = range::resolve(raw, total)
                .map_err(|e| AppError::from_range(e, total))?;
            Some(resolved)
        }
    };

    Ok(Target {
        content_type: mime::content_type_for(&path),
        path,
        total,
        range,
    })
}

/// GET /api/video/{filename}: full file (200) or one byte range (206).
pub async fn serve_video_get(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    req_headers: HeaderMap,
) -> Result<Response, AppError> {
    let target = resolve_target(&state, &filename, &req_headers).await?;
    stream::serve(&target.path, target.total, target.content_type, target.range).await
}

/// HEAD /api/video/{filename}: same status and headers as GET, no body.
/// The file is stat'ed but never opened for reading.
pub async fn serve_video_head(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    req_headers: HeaderMap,
) -> Result<Response, AppError> {
    let target = resolve_target(&state, &filename, &req_headers).await?;
    let head = stream::response_head(target.total, target.content_type, target.range.as_ref());
    Ok(head.into_response())
}
