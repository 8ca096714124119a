use std::path::{Component, Path, PathBuf};

/// Strip one or more layers of surrounding `"` / `'` from a requested name.
///
/// Some players send the file name quoted (`"clip.mp4"`). Only leading and
/// trailing quotes are removed; quotes inside the name are left alone.
pub fn strip_quotes(name: &str) -> &str {
    name.trim_matches(|c| c == '"' || c == '\'')
}

/// Check that `name` is a single plain file name.
///
/// Rejects empty names, `.`/`..`, anything with a separator or NUL, and
/// anything that would parse as more than one path component (absolute paths,
/// Windows prefixes).
pub fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// True if `candidate` lies below `root`. Both must already be canonical, so
/// symlinks and `..` have been resolved away. The root itself does not count.
pub fn is_strictly_inside(root: &Path, candidate: &Path) -> bool {
    candidate != root && candidate.starts_with(root)
}

/// Resolve a client-supplied name to a canonical path inside `root`.
///
/// Returns `None` when the name is not a plain file name, when the file does
/// not exist, or when the canonical target escapes the canonical root (e.g. via
/// a symlink). Callers map every `None` to the same 404 so that "missing" and
/// "not allowed" are indistinguishable.
pub async fn resolve_in_root(root: &Path, requested: &str) -> Option<PathBuf> {
    let name = strip_quotes(requested);
    if !is_plain_file_name(name) {
        tracing::debug!("Rejected unsafe file name {:?}", requested);
        return None;
    }

    let root = tokio::fs::canonicalize(root).await.ok()?;
    let candidate = tokio::fs::canonicalize(root.join(name)).await.ok()?;

    if is_strictly_inside(&root, &candidate) {
        Some(candidate)
    } else {
        tracing::debug!(
            "Rejected {:?}: resolves outside media root ({})",
            requested,
            candidate.display()
        );
        None
    }
}
