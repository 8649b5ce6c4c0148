use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::registry::{Model, ModelRegistry, RegistryError};
use crate::core::store::{DocumentStore, Filter};
use crate::features::gifts::models::GIFT_SCHEMA;
use crate::shared::plain::{into_plain_records, PlainRecord};

pub struct GiftService {
    store: Arc<dyn DocumentStore>,
    model: Arc<Model>,
}

impl GiftService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: &ModelRegistry,
    ) -> std::result::Result<Self, RegistryError> {
        let model = registry.register(&GIFT_SCHEMA)?;
        Ok(Self { store, model })
    }

    pub async fn list(&self, filter: &Filter) -> Result<Vec<PlainRecord>> {
        let docs = self.store.find(&self.model, filter).await.map_err(|e| {
            tracing::error!("Failed to list gifts: {}", e);
            AppError::from(e)
        })?;

        Ok(into_plain_records(docs, &self.model))
    }
}
