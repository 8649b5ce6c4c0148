use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::store::Filter;
use crate::features::sliders::dtos::{CreateSliderDto, SliderResponseDto};
use crate::features::sliders::services::SliderService;
use crate::shared::types::{ApiResponse, Meta};

/// List all sliders
#[utoipa::path(
    get,
    path = "/api/sliders",
    responses(
        (status = 200, description = "List of sliders", body = ApiResponse<Vec<SliderResponseDto>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "sliders"
)]
pub async fn list_sliders(
    State(service): State<Arc<SliderService>>,
) -> Result<Json<ApiResponse<Vec<SliderResponseDto>>>> {
    let sliders = service.list(&Filter::all()).await?;
    let meta = Meta::total(sliders.len());
    Ok(Json(ApiResponse::success(Some(sliders), None, Some(meta))))
}

/// Create a slider
#[utoipa::path(
    post,
    path = "/api/sliders",
    request_body = CreateSliderDto,
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "sliders"
)]
pub async fn create_slider(
    State(service): State<Arc<SliderService>>,
    AppJson(dto): AppJson<CreateSliderDto>,
) -> Result<(StatusCode, Json<ApiResponse<SliderResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let slider = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(slider),
            Some("Slider created".to_string()),
            None,
        )),
    ))
}
