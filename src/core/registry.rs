//! Model registry.
//!
//! Record shapes are declared as `static` [`ModelSchema`] values and turned
//! into shared [`Model`] handles by registering them with a [`ModelRegistry`].
//! The registry is created once in `main` and handed to every service that
//! needs a model, so registration order stays explicit.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::store::StoreError;
use crate::shared::validation::{COLLECTION_NAME_REGEX, FIELD_NAME_REGEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Array,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Array => "array",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Array => value.is_array(),
        }
    }
}

/// A declared field of a record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: false,
            unique: false,
        }
    }

    pub const fn array(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Array,
            required: false,
            unique: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Declarative record shape.
///
/// Undeclared fields are stored as-is; only declared fields are checked.
#[derive(Debug)]
pub struct ModelSchema {
    pub name: &'static str,
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
    pub timestamps: bool,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid collection name '{collection}' for model {model}")]
    InvalidCollection {
        model: &'static str,
        collection: &'static str,
    },

    #[error("Invalid field name '{field}' for model {model}")]
    InvalidField {
        model: &'static str,
        field: &'static str,
    },
}

/// A registered model, shared between services
#[derive(Debug)]
pub struct Model {
    schema: &'static ModelSchema,
}

impl Model {
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn collection(&self) -> &'static str {
        self.schema.collection
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.schema.fields
    }

    pub fn timestamps(&self) -> bool {
        self.schema.timestamps
    }

    pub fn unique_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.schema.fields.iter().filter(|f| f.unique)
    }

    /// Name of the unique index backing `field` (lowercase, as Postgres reports it)
    pub fn unique_index_name(&self, field: &str) -> String {
        format!("{}_{}_key", self.schema.collection, field).to_ascii_lowercase()
    }

    /// Reverse lookup of [`Model::unique_index_name`]
    pub fn field_for_index(&self, index: &str) -> Option<&'static str> {
        self.unique_fields()
            .find(|f| self.unique_index_name(f.name) == index)
            .map(|f| f.name)
    }

    /// Check a document body against the declared fields.
    ///
    /// Required fields must be present, non-null and, for strings, non-empty.
    pub fn validate(&self, body: &Map<String, Value>) -> Result<(), StoreError> {
        let mut problems = Vec::new();

        for field in self.schema.fields {
            match body.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        problems.push(format!("`{}` is required", field.name));
                    }
                }
                Some(value) if !field.kind.accepts(value) => {
                    problems.push(format!(
                        "`{}` must be of type {}",
                        field.name,
                        field.kind.as_str()
                    ));
                }
                Some(Value::String(s)) if field.required && s.is_empty() => {
                    problems.push(format!("`{}` is required", field.name));
                }
                Some(_) => {}
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(format!(
                "{} validation failed: {}",
                self.schema.name,
                problems.join(", ")
            )))
        }
    }
}

/// Registry of models keyed by model name
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: RwLock<HashMap<&'static str, Arc<Model>>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema, or return the model already registered under its name.
    pub fn register(&self, schema: &'static ModelSchema) -> Result<Arc<Model>, RegistryError> {
        if let Some(existing) = self.get(schema.name) {
            tracing::debug!("Model {} already registered, reusing", schema.name);
            return Ok(existing);
        }

        check_schema(schema)?;

        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let model = models
            .entry(schema.name)
            .or_insert_with(|| {
                tracing::info!(
                    "Registered model {} (collection={})",
                    schema.name,
                    schema.collection
                );
                Arc::new(Model { schema })
            })
            .clone();

        Ok(model)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Model>> {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// All registered models, ordered by name
    pub fn models(&self) -> Vec<Arc<Model>> {
        let mut models: Vec<Arc<Model>> = self
            .models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        models.sort_by_key(|m| m.name());
        models
    }
}

fn check_schema(schema: &'static ModelSchema) -> Result<(), RegistryError> {
    if !COLLECTION_NAME_REGEX.is_match(schema.collection) {
        return Err(RegistryError::InvalidCollection {
            model: schema.name,
            collection: schema.collection,
        });
    }

    if let Some(field) = schema
        .fields
        .iter()
        .find(|f| !FIELD_NAME_REGEX.is_match(f.name))
    {
        return Err(RegistryError::InvalidField {
            model: schema.name,
            field: field.name,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static WIDGET_SCHEMA: ModelSchema = ModelSchema {
        name: "Widget",
        collection: "widgets",
        fields: &[
            FieldSpec::string("label").required().unique(),
            FieldSpec::array("parts"),
        ],
        timestamps: true,
    };

    static BROKEN_SCHEMA: ModelSchema = ModelSchema {
        name: "Broken",
        collection: "broken-things",
        fields: &[],
        timestamps: false,
    };

    static BAD_FIELD_SCHEMA: ModelSchema = ModelSchema {
        name: "BadField",
        collection: "bad_fields",
        fields: &[FieldSpec::string("label') IS NULL --")],
        timestamps: false,
    };

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_register_twice_returns_same_model() {
        let registry = ModelRegistry::new();

        let first = registry.register(&WIDGET_SCHEMA).unwrap();
        let second = registry.register(&WIDGET_SCHEMA).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.models().len(), 1);
        assert_eq!(registry.get("Widget").unwrap().collection(), "widgets");
    }

    #[test]
    fn test_register_rejects_unsafe_identifiers() {
        let registry = ModelRegistry::new();

        assert!(matches!(
            registry.register(&BROKEN_SCHEMA),
            Err(RegistryError::InvalidCollection { .. })
        ));
        assert!(matches!(
            registry.register(&BAD_FIELD_SCHEMA),
            Err(RegistryError::InvalidField { .. })
        ));
        assert!(registry.models().is_empty());
    }

    #[test]
    fn test_validate_required_field() {
        let registry = ModelRegistry::new();
        let model = registry.register(&WIDGET_SCHEMA).unwrap();

        assert!(model.validate(&body(json!({ "label": "gear" }))).is_ok());

        for invalid in [json!({}), json!({ "label": null }), json!({ "label": "" })] {
            let err = model.validate(&body(invalid)).unwrap_err();
            assert!(matches!(err, StoreError::Validation(ref m) if m.contains("`label` is required")));
        }
    }

    #[test]
    fn test_validate_field_kinds() {
        let registry = ModelRegistry::new();
        let model = registry.register(&WIDGET_SCHEMA).unwrap();

        let err = model
            .validate(&body(json!({ "label": 7, "parts": "bolt" })))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`label` must be of type string"));
        assert!(message.contains("`parts` must be of type array"));
    }

    #[test]
    fn test_unique_index_lookup() {
        let registry = ModelRegistry::new();
        let model = registry.register(&WIDGET_SCHEMA).unwrap();

        assert_eq!(model.unique_index_name("label"), "widgets_label_key");
        assert_eq!(model.field_for_index("widgets_label_key"), Some("label"));
        assert_eq!(model.field_for_index("widgets_parts_key"), None);
    }
}
