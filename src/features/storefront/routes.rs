use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sliders::SliderService;
use crate::features::storefront::handlers;

/// Create routes for the storefront
pub fn routes(sliders: Arc<SliderService>) -> Router {
    Router::new()
        .route("/", get(handlers::storefront_page))
        .with_state(sliders)
}
