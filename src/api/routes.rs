use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use super::handlers::*;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/compute-ndvi", post(compute_ndvi_image))
        .route("/compute-ndvi-json", post(compute_ndvi_json))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(100 * 1024 * 1024)) // 100MB limit
                .layer(CorsLayer::permissive()),
        )
}
