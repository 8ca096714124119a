pub mod catalog;
pub mod error;
pub mod media;
pub mod state;
pub mod stream;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origin.as_deref());
    // Bounds time to the response head only; body streaming is not cut off.
    // Expiry answers 408.
    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        state.config.request_timeout,
    );

    Router::new()
        .route("/api/videos", get(catalog::list_videos))
        .route("/api/videos/details", get(catalog::list_video_details))
        .route(
            "/api/video/{filename}",
            get(media::serve_video_get).head(media::serve_video_head),
        )
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One configured origin, or any origin when unset or unparseable.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", e);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
        .expose_headers(Any)
}
