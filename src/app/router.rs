use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{health, metrics, pix};
use crate::services::PixService;

pub fn create_router(service: Arc<PixService>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/metrics", get(metrics::get_metrics))
        .route(
            pix::GENERATE_PIX_PATH,
            post(pix::generate_pix)
                .options(pix::preflight)
                .fallback(pix::method_not_allowed),
        )
        // Front-end roda em outro domínio: libera qualquer origem, método e header
        .layer(CorsLayer::permissive())
        .with_state(service)
}
