use std::sync::Arc;

use axum::extract::State;

use crate::core::store::Filter;
use crate::features::categories::dtos::CategoryListProps;
use crate::features::categories::services::CostCategoryService;
use crate::shared::views::{Component, Page, PageError};

/// Category listing, rendered with every stored category
pub async fn categories_page(
    State(service): State<Arc<CostCategoryService>>,
) -> Result<Page, PageError> {
    let categories = service.list(&Filter::all()).await?;

    Ok(Page::component(
        "Cost categories",
        Component::CategoryList,
        &CategoryListProps { categories },
    )?)
}
