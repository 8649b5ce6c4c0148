use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::gifts::handlers as gifts_handlers;
use crate::features::ledgers::handlers as ledgers_handlers;
use crate::features::products::handlers as products_handlers;
use crate::features::schemas::{dtos as schemas_dtos, handlers as schemas_handlers};
use crate::features::sliders::{dtos as sliders_dtos, handlers as sliders_handlers};
use crate::shared::plain::PlainRecord;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        // Sliders
        sliders_handlers::list_sliders,
        sliders_handlers::create_slider,
        // Products
        products_handlers::list_products,
        // Gifts
        gifts_handlers::list_gifts,
        // Ledgers
        ledgers_handlers::list_orders,
        ledgers_handlers::list_gift_transactions,
        ledgers_handlers::list_spin_history,
        // Models
        schemas_handlers::list_models,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PlainRecord,
            ApiResponse<Vec<PlainRecord>>,
            // Categories
            categories_dtos::CreateCostCategoryDto,
            categories_dtos::CostCategoryResponseDto,
            ApiResponse<categories_dtos::CostCategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CostCategoryResponseDto>>,
            // Sliders
            sliders_dtos::SliderImageDto,
            sliders_dtos::CreateSliderDto,
            sliders_dtos::SliderResponseDto,
            ApiResponse<sliders_dtos::SliderResponseDto>,
            ApiResponse<Vec<sliders_dtos::SliderResponseDto>>,
            // Models
            schemas_dtos::FieldDescriptorDto,
            schemas_dtos::ModelDescriptorDto,
            ApiResponse<Vec<schemas_dtos::ModelDescriptorDto>>,
        )
    ),
    tags(
        (name = "categories", description = "Cost categories"),
        (name = "sliders", description = "Storefront slider banners"),
        (name = "products", description = "Product catalogue (read-only)"),
        (name = "gifts", description = "Gifts (read-only)"),
        (name = "ledgers", description = "Orders, gift transactions and spin history (read-only)"),
        (name = "models", description = "Registered record shapes"),
    ),
    info(
        title = "Giftshop Admin API",
        version = "0.1.0",
        description = "API documentation for the gift shop dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
