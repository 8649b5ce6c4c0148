use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::store::Filter;
use crate::features::gifts::services::GiftService;
use crate::shared::plain::PlainRecord;
use crate::shared::types::{ApiResponse, Meta};

/// List all gifts
#[utoipa::path(
    get,
    path = "/api/gifts",
    responses(
        (status = 200, description = "List of gifts", body = ApiResponse<Vec<PlainRecord>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "gifts"
)]
pub async fn list_gifts(
    State(service): State<Arc<GiftService>>,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    let gifts = service.list(&Filter::all()).await?;
    let meta = Meta::total(gifts.len());
    Ok(Json(ApiResponse::success(Some(gifts), None, Some(meta))))
}
