use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::ledgers::handlers;
use crate::features::ledgers::services::LedgerService;

/// Create routes for the ledgers feature
pub fn routes(service: Arc<LedgerService>) -> Router {
    Router::new()
        .route("/api/orders", get(handlers::list_orders))
        .route("/api/gift-transactions", get(handlers::list_gift_transactions))
        .route("/api/spin-history", get(handlers::list_spin_history))
        .route("/dashboard/orders", get(handlers::orders_page))
        .route(
            "/dashboard/gift-transactions",
            get(handlers::gift_transactions_page),
        )
        .route("/dashboard/spin-history", get(handlers::spin_history_page))
        .route("/fragments/orders", get(handlers::orders_fragment))
        .route(
            "/fragments/gift-transactions",
            get(handlers::gift_transactions_fragment),
        )
        .route(
            "/fragments/spin-history",
            get(handlers::spin_history_fragment),
        )
        .with_state(service)
}
