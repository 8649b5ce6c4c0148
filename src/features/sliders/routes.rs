use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sliders::handlers;
use crate::features::sliders::services::SliderService;

/// Create routes for the sliders feature
pub fn routes(service: Arc<SliderService>) -> Router {
    Router::new()
        .route(
            "/api/sliders",
            get(handlers::list_sliders).post(handlers::create_slider),
        )
        .with_state(service)
}
