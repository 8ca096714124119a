//! File body delivery for full (200) and partial (206) responses.

use std::io::SeekFrom;
use std::path::Path;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::http::error::AppError;
use crate::range::ResolvedRange;

/// Read buffer size per body chunk.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Headers shared by every video response, GET or HEAD.
pub fn base_headers(content_type: &'static str, content_length: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content_length));
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers
}

/// Status and headers for a response, without touching the file.
pub fn response_head(
    total: u64,
    content_type: &'static str,
    range: Option<&ResolvedRange>,
) -> (StatusCode, HeaderMap) {
    match range {
        None => (StatusCode::OK, base_headers(content_type, total)),
        Some(r) => {
            let mut headers = base_headers(content_type, r.len());
            // content_range() is plain ASCII digits, so this cannot fail
            if let Ok(value) = HeaderValue::from_str(&r.content_range()) {
                headers.insert(header::CONTENT_RANGE, value);
            }
            (StatusCode::PARTIAL_CONTENT, headers)
        }
    }
}

/// Stream `path` (or the `range` slice of it) as the response body.
///
/// The file handle lives inside the body stream, so it is closed as soon as the
/// body is dropped: on completion, on client disconnect, or on error. A read
/// error after the head has gone out surfaces as a body error, which makes the
/// server abort the connection instead of sending a second status.
pub async fn serve(
    path: &Path,
    total: u64,
    content_type: &'static str,
    range: Option<ResolvedRange>,
) -> Result<Response, AppError> {
    // The file may vanish between the stat and the open
    let mut file = tokio::fs::File::open(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound,
        _ => AppError::Io(e),
    })?;

    let (start, length) = match &range {
        Some(r) => (r.start, r.len()),
        None => (0, total),
    };
    if start > 0 {
        file.seek(SeekFrom::Start(start)).await.map_err(AppError::Io)?;
    }

    let shown = path.display().to_string();
    let stream = ReaderStream::with_capacity(file.take(length), CHUNK_SIZE).inspect_err(
        move |e| tracing::warn!("Stream aborted for {} at I/O error: {}", shown, e),
    );

    let (status, headers) = response_head(total, content_type, range.as_ref());
    tracing::debug!(
        "Serving {} {} bytes from offset {} ({})",
        path.display(),
        length,
        start,
        status
    );
    Ok((status, headers, Body::from_stream(stream)).into_response())
}
