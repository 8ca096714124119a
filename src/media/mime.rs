use std::path::Path;

/// Fallback Content-Type for files whose extension has no entry in the table.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extensions (lowercase, no dot) that make a file part of the catalog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mkv", "avi", "mov", "webm"];

/// Map a file path to its video MIME type by extension.
///
/// Returns `None` for anything outside the allow-list. Extensions are matched
/// case-insensitively, so `MOVIE.MP4` and `movie.mp4` are both recognized.
pub fn classify(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    let mime = match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => return None,
    };

    Some(mime)
}

/// True if the file name carries a catalog extension.
pub fn is_video(path: &Path) -> bool {
    classify(path).is_some()
}

/// Content-Type to send for a served file.
pub fn content_type_for(path: &Path) -> &'static str {
    classify(path).unwrap_or(FALLBACK_MIME)
}
