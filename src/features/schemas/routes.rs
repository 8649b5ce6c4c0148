use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::registry::ModelRegistry;
use crate::features::schemas::handlers;

/// Create routes for model introspection
pub fn routes(registry: Arc<ModelRegistry>) -> Router {
    Router::new()
        .route("/api/models", get(handlers::list_models))
        .with_state(registry)
}
