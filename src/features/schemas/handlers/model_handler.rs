use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::registry::ModelRegistry;
use crate::features::schemas::dtos::ModelDescriptorDto;
use crate::shared::types::{ApiResponse, Meta};

/// List registered models
#[utoipa::path(
    get,
    path = "/api/models",
    responses(
        (status = 200, description = "Registered models ordered by name", body = ApiResponse<Vec<ModelDescriptorDto>>)
    ),
    tag = "models"
)]
pub async fn list_models(
    State(registry): State<Arc<ModelRegistry>>,
) -> Result<Json<ApiResponse<Vec<ModelDescriptorDto>>>> {
    let models: Vec<ModelDescriptorDto> = registry
        .models()
        .iter()
        .map(|model| model.as_ref().into())
        .collect();
    let meta = Meta::total(models.len());
    Ok(Json(ApiResponse::success(Some(models), None, Some(meta))))
}
