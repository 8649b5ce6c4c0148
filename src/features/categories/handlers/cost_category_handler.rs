use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::Filter;
use crate::features::categories::dtos::{CostCategoryResponseDto, CreateCostCategoryDto};
use crate::features::categories::services::CostCategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all cost categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of cost categories", body = ApiResponse<Vec<CostCategoryResponseDto>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CostCategoryService>>,
) -> Result<Json<ApiResponse<Vec<CostCategoryResponseDto>>>> {
    let categories = service.list(&Filter::all()).await?;
    let meta = Meta::total(categories.len());
    Ok(Json(ApiResponse::success(Some(categories), None, Some(meta))))
}

/// Create a cost category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCostCategoryDto,
    responses(
        (status = 201, description = "Cost category created", body = ApiResponse<CostCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name already taken")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CostCategoryService>>,
    AppJson(dto): AppJson<CreateCostCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CostCategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Cost category created".to_string()),
            None,
        )),
    ))
}
