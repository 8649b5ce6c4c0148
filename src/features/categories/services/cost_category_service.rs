use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::registry::{Model, ModelRegistry, RegistryError};
use crate::core::store::{DocumentStore, Filter};
use crate::features::categories::dtos::{CostCategoryResponseDto, CreateCostCategoryDto};
use crate::features::categories::models::{CostCategory, COST_CATEGORY_SCHEMA};

/// Service for cost category operations
pub struct CostCategoryService {
    store: Arc<dyn DocumentStore>,
    model: Arc<Model>,
}

impl CostCategoryService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: &ModelRegistry,
    ) -> std::result::Result<Self, RegistryError> {
        let model = registry.register(&COST_CATEGORY_SCHEMA)?;
        Ok(Self { store, model })
    }

    /// List cost categories matching `filter`, oldest first
    pub async fn list(&self, filter: &Filter) -> Result<Vec<CostCategoryResponseDto>> {
        let docs = self.store.find(&self.model, filter).await.map_err(|e| {
            tracing::error!("Failed to list cost categories: {}", e);
            AppError::from(e)
        })?;

        docs.into_iter()
            .map(|doc| {
                CostCategory::try_from(doc)
                    .map(Into::into)
                    .map_err(AppError::from)
            })
            .collect()
    }

    /// Create a cost category. A taken name is a conflict.
    pub async fn create(&self, dto: CreateCostCategoryDto) -> Result<CostCategoryResponseDto> {
        let doc = self.store.insert(&self.model, dto.into_body()).await?;
        let category = CostCategory::try_from(doc)?;

        tracing::info!(
            "Cost category created: id={}, name={}",
            category.id,
            category.name
        );

        Ok(category.into())
    }
}
