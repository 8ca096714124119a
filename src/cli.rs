use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vidserve",
    about = "Serve a directory of videos over HTTP with byte-range seeking",
    long_about = None,
    version,
)]
pub struct Args {
    /// Directory containing the videos to serve [default: ./videos]
    pub media_dir: Option<PathBuf>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Allowed cross-origin source, e.g. http://localhost:5173 [default: any]
    #[arg(long, value_name = "ORIGIN")]
    pub cors_origin: Option<String>,

    /// Seconds to wait for a response head before answering 408 [default: 30]
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Path to TOML config file (overrides default search: ./vidserve.toml, ~/.config/vidserve/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
