use clap::Parser;

use vidserve::{cli, config, http};

/// Wait for Ctrl+C. A second Ctrl+C during the graceful drain exits at once.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down, draining in-flight streams...");

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nvidserve: forced exit");
            std::process::exit(1);
        }
    });
}

/// Create the media directory on first run; refuse a path that is not a directory.
fn prepare_media_dir(config: &config::Config) {
    let dir = &config.media_dir;
    if !dir.exists() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("error: cannot create media directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
        tracing::info!("Created media directory {}", dir.display());
    } else if !dir.is_dir() {
        eprintln!("error: not a directory: {}", dir.display());
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to load config file {}: {}", path.display(), e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);
    prepare_media_dir(&config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        });

    tracing::info!(
        "Serving videos from {} on http://{}:{}",
        config.media_dir.display(),
        config.host,
        config.port
    );
    match &config.cors_origin {
        Some(origin) => tracing::info!("CORS origin: {}", origin),
        None => tracing::info!("CORS origin: any"),
    }

    let app = http::build_router(http::state::AppState::new(config));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
