//! Document store.
//!
//! Every collection holds schemaless JSON documents; the [`Model`] a caller
//! passes in decides which fields are checked on write and which fields carry
//! a unique index. Two backends implement [`DocumentStore`]:
//!
//! | Backend | Type | Use |
//! |---------|------|-----|
//! | PostgreSQL JSONB | [`PgDocumentStore`] | production |
//! | in-process | [`MemoryStore`] | local runs and tests |

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::core::registry::Model;

/// Keys owned by the store; stripped from submitted bodies
pub const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{model} with this `{field}` already exists")]
    UniqueViolation { model: &'static str, field: String },

    #[error("Failed to decode stored document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A stored document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub body: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// New document with a time-ordered id and both timestamps set to now
    pub fn new(body: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deserialize the body into a typed shape
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_value(Value::Object(self.body.clone()))?)
    }
}

/// Top-level equality filter. The empty filter matches every document.
///
/// A condition matches when the stored value under the field equals the
/// expected value as a whole. Arrays and objects never match on a subset,
/// and numbers compare by value (`1` equals `1.0`), the same way JSONB
/// equality does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.conditions.iter()
    }

    pub fn matches(&self, body: &Map<String, Value>) -> bool {
        self.conditions.iter().all(|(field, expected)| {
            body.get(field).is_some_and(|actual| values_equal(actual, expected))
        })
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend tag for logs
    fn backend(&self) -> &'static str;

    /// Documents of the model's collection matching `filter`, oldest first
    async fn find(&self, model: &Model, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    /// Validate and persist a new document
    async fn insert(&self, model: &Model, body: Map<String, Value>)
        -> Result<Document, StoreError>;

    /// Make sure every unique field of the model is backed by an index
    async fn sync_indexes(&self, model: &Model) -> Result<(), StoreError>;
}

/// Strip reserved keys and run schema validation before anything is written
pub(crate) fn prepare_body(
    model: &Model,
    mut body: Map<String, Value>,
) -> Result<Map<String, Value>, StoreError> {
    for key in RESERVED_KEYS {
        body.remove(key);
    }
    model.validate(&body)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches_top_level_fields() {
        let body = json!({ "status": "paid", "total": 10 })
            .as_object()
            .cloned()
            .unwrap();

        assert!(Filter::all().matches(&body));
        assert!(Filter::all().eq("status", "paid").matches(&body));
        assert!(!Filter::all().eq("status", "pending").matches(&body));
        assert!(!Filter::all()
            .eq("status", "paid")
            .eq("total", 11)
            .matches(&body));
    }

    #[test]
    fn test_filter_compares_whole_values() {
        let body = json!({ "tags": ["a", "b"], "meta": { "x": 1, "y": 2 }, "n": 1 })
            .as_object()
            .cloned()
            .unwrap();

        assert!(!Filter::all().eq("tags", json!(["a"])).matches(&body));
        assert!(Filter::all().eq("tags", json!(["a", "b"])).matches(&body));
        assert!(!Filter::all().eq("tags", json!(["b", "a"])).matches(&body));
        assert!(!Filter::all().eq("meta", json!({ "x": 1 })).matches(&body));
        assert!(Filter::all()
            .eq("meta", json!({ "y": 2.0, "x": 1 }))
            .matches(&body));
        assert!(Filter::all().eq("n", 1.0).matches(&body));
        assert!(!Filter::all().eq("n", 1.5).matches(&body));
        assert!(!Filter::all().eq("n", "1").matches(&body));
        assert!(!Filter::all().eq("missing", Value::Null).matches(&body));
    }

    #[test]
    fn test_document_body_as() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let doc = Document::new(json!({ "name": "Shipping" }).as_object().cloned().unwrap());
        let named: Named = doc.body_as().unwrap();
        assert_eq!(named.name, "Shipping");

        let empty = Document::new(Map::new());
        assert!(matches!(
            empty.body_as::<Named>(),
            Err(StoreError::Decode(_))
        ));
    }
}
