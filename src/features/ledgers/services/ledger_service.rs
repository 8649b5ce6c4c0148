use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::registry::{Model, ModelRegistry, RegistryError};
use crate::core::store::{DocumentStore, Filter};
use crate::features::ledgers::models::LedgerKind;
use crate::shared::plain::{into_plain_records, PlainRecord};

/// Lists every ledger collection from one store
pub struct LedgerService {
    store: Arc<dyn DocumentStore>,
    models: HashMap<LedgerKind, Arc<Model>>,
}

impl LedgerService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: &ModelRegistry,
    ) -> std::result::Result<Self, RegistryError> {
        let models = LedgerKind::ALL
            .into_iter()
            .map(|kind| registry.register(kind.schema()).map(|model| (kind, model)))
            .collect::<std::result::Result<HashMap<_, _>, RegistryError>>()?;

        Ok(Self { store, models })
    }

    fn model(&self, kind: LedgerKind) -> Result<&Arc<Model>> {
        self.models.get(&kind).ok_or_else(|| {
            AppError::Internal(format!("{} model is not registered", kind.title()))
        })
    }

    pub async fn list(&self, kind: LedgerKind, filter: &Filter) -> Result<Vec<PlainRecord>> {
        let model = self.model(kind)?;
        let docs = self.store.find(model, filter).await.map_err(|e| {
            tracing::error!("Failed to list {}: {}", model.collection(), e);
            AppError::from(e)
        })?;

        Ok(into_plain_records(docs, model))
    }
}
