use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::media::mime::is_video;
use crate::media::safe_path::is_strictly_inside;

/// One servable file in the media root, as seen at listing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    /// Bare file name. Never contains a path separator.
    pub name: String,
    pub size_bytes: u64,
}

/// Listing result in filesystem enumeration order. Not sorted, and not stable
/// across calls.
pub type CatalogSnapshot = Vec<MediaEntry>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read media directory {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog listing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// List the video files directly inside `root`.
///
/// Directory enumeration is blocking, so it runs on tokio's blocking pool.
pub async fn list(root: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let root = root.to_owned();
    tokio::task::spawn_blocking(move || list_blocking(&root)).await?
}

/// Synchronous form of [`list`].
///
/// Only the root itself failing to open is fatal. Entries that fail individually
/// (removed mid-listing, dangling symlink) are logged and skipped, as are
/// symlinks whose target lies outside the root.
pub fn list_blocking(root: &Path) -> Result<CatalogSnapshot, CatalogError> {
    let unavailable = |source: std::io::Error| CatalogError::Unavailable {
        path: root.to_owned(),
        source,
    };
    let canonical_root = std::fs::canonicalize(root).map_err(unavailable)?;
    let mut entries = Vec::new();

    let walker = WalkDir::new(&canonical_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // depth 0 is the root: walkdir reports it when read_dir on it fails
            Err(e) if e.depth() == 0 => return Err(unavailable(e.into())),
            Err(e) => {
                tracing::warn!("Skipping unreadable catalog entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_video(entry.path()) {
            continue;
        }

        match std::fs::canonicalize(entry.path()) {
            Ok(target) if is_strictly_inside(&canonical_root, &target) => {}
            Ok(target) => {
                tracing::debug!(
                    "Skipping {}: resolves outside media root ({})",
                    entry.path().display(),
                    target.display()
                );
                continue;
            }
            Err(e) => {
                tracing::warn!("Cannot resolve {}: {}", entry.path().display(), e);
                continue;
            }
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(
                "Skipping non UTF-8 file name: {}",
                entry.path().display()
            );
            continue;
        };

        let size_bytes = match entry.metadata() {
            Ok(m) => m.len(),
            Err(e) => {
                tracing::warn!("Cannot stat {}: {}", entry.path().display(), e);
                continue;
            }
        };

        entries.push(MediaEntry {
            name: name.to_owned(),
            size_bytes,
        });
    }

    tracing::debug!("Listed {} videos in {}", entries.len(), root.display());
    Ok(entries)
}
