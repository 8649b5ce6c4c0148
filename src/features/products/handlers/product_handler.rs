use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::store::Filter;
use crate::features::products::services::ProductService;
use crate::shared::plain::PlainRecord;
use crate::shared::types::{ApiResponse, Meta};

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<PlainRecord>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    let products = service.list(&Filter::all()).await?;
    let meta = Meta::total(products.len());
    Ok(Json(ApiResponse::success(Some(products), None, Some(meta))))
}
