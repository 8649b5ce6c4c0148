//! Service wiring and the application router.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{any, get},
    Router,
};

use crate::core::error::AppError;
use crate::core::registry::{ModelRegistry, RegistryError};
use crate::core::store::DocumentStore;
use crate::features::categories::{routes as categories_routes, CostCategoryService};
use crate::features::coupons::routes as coupons_routes;
use crate::features::gifts::{routes as gifts_routes, GiftService};
use crate::features::ledgers::{routes as ledgers_routes, LedgerService};
use crate::features::products::{routes as products_routes, ProductService};
use crate::features::schemas::routes as schemas_routes;
use crate::features::sliders::{routes as sliders_routes, SliderService};
use crate::features::storefront::routes as storefront_routes;
use crate::shared::views::PageError;

/// Every feature service, built against one store and one model registry
pub struct AppServices {
    pub registry: Arc<ModelRegistry>,
    pub categories: Arc<CostCategoryService>,
    pub sliders: Arc<SliderService>,
    pub products: Arc<ProductService>,
    pub gifts: Arc<GiftService>,
    pub ledgers: Arc<LedgerService>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: Arc<ModelRegistry>,
    ) -> Result<Self, RegistryError> {
        let categories = Arc::new(CostCategoryService::new(Arc::clone(&store), &registry)?);
        let sliders = Arc::new(SliderService::new(Arc::clone(&store), &registry)?);
        let products = Arc::new(ProductService::new(Arc::clone(&store), &registry)?);
        let gifts = Arc::new(GiftService::new(Arc::clone(&store), &registry)?);
        let ledgers = Arc::new(LedgerService::new(store, &registry)?);

        tracing::info!(
            "Services initialized ({} models registered)",
            registry.models().len()
        );

        Ok(Self {
            registry,
            categories,
            sliders,
            products,
            gifts,
            ledgers,
        })
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> PageError {
    PageError(AppError::NotFound("Page not found".to_string()))
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

/// Pages, fragments and the JSON API. Middleware layers are added by the caller.
pub fn router(services: &AppServices) -> Router {
    Router::new()
        .merge(storefront_routes::routes(Arc::clone(&services.sliders)))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(sliders_routes::routes(Arc::clone(&services.sliders)))
        .merge(products_routes::routes(Arc::clone(&services.products)))
        .merge(coupons_routes::routes(Arc::clone(&services.products)))
        .merge(gifts_routes::routes(Arc::clone(&services.gifts)))
        .merge(ledgers_routes::routes(Arc::clone(&services.ledgers)))
        .merge(schemas_routes::routes(Arc::clone(&services.registry)))
        .route("/health", get(health_check))
        .route("/api", any(api_not_found))
        .route("/api/{*path}", any(api_not_found))
        .fallback(not_found)
}
