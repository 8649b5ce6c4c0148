use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::core::registry::Model;

use super::{prepare_body, Document, DocumentStore, Filter, StoreError};

/// In-process document store. Unique fields are enforced by scanning the
/// collection under the write lock, so checks and inserts are atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find(&self, model: &Model, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(model.collection())
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(&doc.body))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        model: &Model,
        body: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let body = prepare_body(model, body)?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(model.collection()).or_default();

        for field in model.unique_fields() {
            let Some(value) = body.get(field.name).filter(|v| !v.is_null()) else {
                continue;
            };
            if docs.iter().any(|doc| doc.body.get(field.name) == Some(value)) {
                return Err(StoreError::UniqueViolation {
                    model: model.name(),
                    field: field.name.to_string(),
                });
            }
        }

        let doc = Document::new(body);
        docs.push(doc.clone());
        Ok(doc)
    }

    async fn sync_indexes(&self, _model: &Model) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{FieldSpec, ModelRegistry, ModelSchema};
    use serde_json::json;

    static TAG_SCHEMA: ModelSchema = ModelSchema {
        name: "Tag",
        collection: "tags",
        fields: &[FieldSpec::string("label").required().unique()],
        timestamps: true,
    };

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_in_order() {
        let store = MemoryStore::new();
        let model = ModelRegistry::new().register(&TAG_SCHEMA).unwrap();

        store.insert(&model, body(json!({ "label": "a" }))).await.unwrap();
        store.insert(&model, body(json!({ "label": "b" }))).await.unwrap();

        let labels: Vec<Value> = store
            .find(&model, &Filter::all())
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.body["label"].clone())
            .collect();
        assert_eq!(labels, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn test_unique_field_rejects_duplicate() {
        let store = MemoryStore::new();
        let model = ModelRegistry::new().register(&TAG_SCHEMA).unwrap();

        store.insert(&model, body(json!({ "label": "dup" }))).await.unwrap();
        let err = store
            .insert(&model, body(json!({ "label": "dup" })))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::UniqueViolation { ref field, .. } if field == "label"));
        assert_eq!(store.find(&model, &Filter::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_body_is_not_persisted() {
        let store = MemoryStore::new();
        let model = ModelRegistry::new().register(&TAG_SCHEMA).unwrap();

        let err = store.insert(&model, Map::new()).await.unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.find(&model, &Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reserved_keys_are_stripped() {
        let store = MemoryStore::new();
        let model = ModelRegistry::new().register(&TAG_SCHEMA).unwrap();

        let doc = store
            .insert(
                &model,
                body(json!({ "label": "x", "id": "forged", "createdAt": "1970-01-01" })),
            )
            .await
            .unwrap();

        assert!(!doc.body.contains_key("id"));
        assert!(!doc.body.contains_key("createdAt"));
    }

    #[tokio::test]
    async fn test_find_with_filter() {
        let store = MemoryStore::new();
        let model = ModelRegistry::new().register(&TAG_SCHEMA).unwrap();

        store
            .insert(&model, body(json!({ "label": "red", "group": "color" })))
            .await
            .unwrap();
        store
            .insert(&model, body(json!({ "label": "big", "group": "size" })))
            .await
            .unwrap();

        let found = store
            .find(&model, &Filter::all().eq("group", "size"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body["label"], json!("big"));
    }
}
