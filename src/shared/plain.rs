//! Plain transfer records for collections whose shape is owned elsewhere.
//!
//! A [`PlainRecord`] is the JSON-safe form of a stored document: the body
//! fields, the id as a string and, for models with timestamps, `createdAt` /
//! `updatedAt` as RFC 3339 strings. Nothing store-specific survives the
//! mapping, so a record serializes and deserializes back to an equal value.

use std::ops::Deref;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::openapi::schema::{ObjectBuilder, Schema};
use utoipa::openapi::RefOr;

use crate::core::registry::Model;
use crate::core::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainRecord(pub Map<String, Value>);

impl PlainRecord {
    /// Map a stored document to its plain form
    pub fn from_document(doc: Document, model: &Model) -> Self {
        let mut record = doc.body;
        record.insert("id".to_string(), Value::String(doc.id.to_string()));
        if model.timestamps() {
            record.insert("createdAt".to_string(), timestamp(doc.created_at));
            record.insert("updatedAt".to_string(), timestamp(doc.updated_at));
        }
        Self(record)
    }
}

impl Deref for PlainRecord {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Map a query result to plain records, preserving order
pub fn into_plain_records(docs: Vec<Document>, model: &Model) -> Vec<PlainRecord> {
    docs.into_iter()
        .map(|doc| PlainRecord::from_document(doc, model))
        .collect()
}

fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl utoipa::__dev::ComposeSchema for PlainRecord {
    fn compose(_generics: Vec<RefOr<Schema>>) -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .description(Some("Stored record with its id and timestamps"))
                .build(),
        ))
    }
}

impl utoipa::ToSchema for PlainRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{ModelRegistry, ModelSchema};
    use serde_json::json;

    static PLAIN_SCHEMA: ModelSchema = ModelSchema {
        name: "Receipt",
        collection: "receipts",
        fields: &[],
        timestamps: true,
    };

    static BARE_SCHEMA: ModelSchema = ModelSchema {
        name: "Note",
        collection: "notes",
        fields: &[],
        timestamps: false,
    };

    fn document() -> Document {
        Document::new(
            json!({ "total": 125000, "items": [{ "sku": "MUG-01" }], "paid": true })
                .as_object()
                .cloned()
                .unwrap(),
        )
    }

    #[test]
    fn test_plain_record_keeps_scalar_fields() {
        let model = ModelRegistry::new().register(&PLAIN_SCHEMA).unwrap();
        let doc = document();
        let id = doc.id.to_string();

        let record = PlainRecord::from_document(doc, &model);

        assert_eq!(record.get("id"), Some(&json!(id)));
        assert_eq!(record.get("total"), Some(&json!(125000)));
        assert_eq!(record.get("paid"), Some(&json!(true)));
        assert!(record.get("createdAt").is_some_and(Value::is_string));
        assert!(record.get("updatedAt").is_some_and(Value::is_string));
    }

    #[test]
    fn test_plain_record_without_timestamps() {
        let model = ModelRegistry::new().register(&BARE_SCHEMA).unwrap();

        let record = PlainRecord::from_document(document(), &model);

        assert!(record.get("createdAt").is_none());
        assert!(record.get("updatedAt").is_none());
    }

    #[test]
    fn test_plain_record_survives_json_round_trip() {
        let model = ModelRegistry::new().register(&PLAIN_SCHEMA).unwrap();
        let records = into_plain_records(vec![document(), document()], &model);

        let encoded = serde_json::to_string(&records).unwrap();
        let decoded: Vec<PlainRecord> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, records);
    }

    #[test]
    fn test_plain_record_schema_composes_into_envelope() {
        use crate::shared::types::ApiResponse;
        use utoipa::PartialSchema;

        let RefOr::T(Schema::Object(record)) = PlainRecord::schema() else {
            panic!("record schema should be an inline object");
        };
        assert!(record.properties.is_empty());

        let RefOr::T(Schema::Object(envelope)) = ApiResponse::<Vec<PlainRecord>>::schema() else {
            panic!("envelope schema should be an inline object");
        };
        assert!(envelope.properties.contains_key("data"));
    }
}
