use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MEDIA_DIR: &str = "videos";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub media_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Startup configuration. Resolved once, then shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub media_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// CLI flag wins over config file, config file over default.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        let timeout_secs = args
            .request_timeout
            .or(file.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Config {
            media_dir: args
                .media_dir
                .clone()
                .or(file.media_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR)),
            host: args
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            cors_origin: args.cors_origin.clone().or(file.cors_origin),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Config for serving `media_dir` with every other setting at its default.
    pub fn with_media_dir(media_dir: impl Into<PathBuf>) -> Self {
        Config {
            media_dir: media_dir.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("vidserve.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("vidserve").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
