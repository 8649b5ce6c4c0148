use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::error::ErrorKind;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::database::Database;
use crate::core::registry::Model;

use super::{prepare_body, Document, DocumentStore, Filter, StoreError};

const SELECT_SQL: &str = r#"
    SELECT id, body, created_at, updated_at
    FROM documents
"#;

const INSERT_SQL: &str = r#"
    INSERT INTO documents (id, collection, body, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5)
"#;

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Documents stored as JSONB rows of a single `documents` table
pub struct PgDocumentStore {
    db: Arc<Database>,
}

impl PgDocumentStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn pool(&self) -> Result<&PgPool, StoreError> {
        self.db.pool().await.map_err(|e| {
            tracing::error!("Failed to connect to database: {:?}", e);
            StoreError::Connection(e)
        })
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn find(&self, model: &Model, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let pool = self.pool().await?;

        // One equality test per condition: field names and values are both bound
        let mut conditions = vec!["collection = $1".to_string()];
        for i in 0..filter.conditions().count() {
            let param = 2 + i * 2;
            conditions.push(format!("body -> ${}::text = ${}::jsonb", param, param + 1));
        }
        let query = format!(
            "{} WHERE {} ORDER BY created_at, id",
            SELECT_SQL,
            conditions.join(" AND ")
        );

        let mut find = sqlx::query_as::<_, DocumentRow>(&query).bind(model.collection());
        for (field, value) in filter.conditions() {
            find = find.bind(field.as_str()).bind(Json(value));
        }
        let result = find.fetch_all(pool).await;

        let rows = result.map_err(|e| {
            tracing::error!("Failed to query {}: {:?}", model.collection(), e);
            StoreError::Query(e)
        })?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn insert(
        &self,
        model: &Model,
        body: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let body = prepare_body(model, body)?;
        let pool = self.pool().await?;
        let doc = Document::new(body);

        sqlx::query(INSERT_SQL)
            .bind(doc.id)
            .bind(model.collection())
            .bind(Json(&doc.body))
            .bind(doc.created_at)
            .bind(doc.updated_at)
            .execute(pool)
            .await
            .map_err(|e| map_write_error(model, e))?;

        Ok(doc)
    }

    async fn sync_indexes(&self, model: &Model) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        // Identifiers were checked against the registry's identifier regexes
        for field in model.unique_fields() {
            let index = model.unique_index_name(field.name);
            let sql = format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {} ON documents ((body ->> '{}')) WHERE collection = '{}'",
                index,
                field.name,
                model.collection()
            );

            sqlx::query(&sql).execute(pool).await.map_err(|e| {
                tracing::error!("Failed to create index {}: {:?}", index, e);
                StoreError::Query(e)
            })?;

            tracing::debug!("Unique index {} in place", index);
        }

        Ok(())
    }
}

fn map_write_error(model: &Model, error: sqlx::Error) -> StoreError {
    if let Some(db_error) = error.as_database_error() {
        if matches!(db_error.kind(), ErrorKind::UniqueViolation) {
            let field = db_error
                .constraint()
                .and_then(|index| model.field_for_index(index))
                .unwrap_or("unknown")
                .to_string();
            return StoreError::UniqueViolation {
                model: model.name(),
                field,
            };
        }
    }

    tracing::error!("Failed to insert into {}: {:?}", model.collection(), error);
    StoreError::Query(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::core::registry::{FieldSpec, ModelRegistry, ModelSchema};
    use crate::core::store::MemoryStore;
    use serde_json::json;

    static PG_CATEGORY_SCHEMA: ModelSchema = ModelSchema {
        name: "PgCategory",
        collection: "pg_test_categories",
        fields: &[FieldSpec::string("name").required().unique()],
        timestamps: true,
    };

    static PG_RECORD_SCHEMA: ModelSchema = ModelSchema {
        name: "PgRecord",
        collection: "pg_test_records",
        fields: &[],
        timestamps: false,
    };

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    /// Migrated store with an empty collection, or `None` when no database is reachable
    async fn store_for(schema: &'static ModelSchema) -> Option<(PgDocumentStore, Arc<Model>)> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("skipping {}: DATABASE_URL not set", schema.collection);
            return None;
        };
        let db = Arc::new(Database::new(DatabaseConfig {
            url,
            max_connections: 2,
            min_connections: 0,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 60,
            max_lifetime_secs: 300,
        }));
        let Ok(pool) = db.pool().await else {
            eprintln!("skipping {}: database not reachable", schema.collection);
            return None;
        };

        sqlx::migrate!("./migrations").run(pool).await.unwrap();
        sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(schema.collection)
            .execute(pool)
            .await
            .unwrap();

        let model = ModelRegistry::new().register(schema).unwrap();
        let store = PgDocumentStore::new(db);
        store.sync_indexes(&model).await.unwrap();
        Some((store, model))
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL and a local PostgreSQL"]
    async fn test_duplicate_unique_field_is_rejected() {
        let Some((store, model)) = store_for(&PG_CATEGORY_SCHEMA).await else {
            return;
        };

        store
            .insert(&model, body(json!({ "name": "Shipping" })))
            .await
            .unwrap();
        let err = store
            .insert(&model, body(json!({ "name": "Shipping" })))
            .await
            .unwrap_err();

        assert!(
            matches!(err, StoreError::UniqueViolation { model: "PgCategory", ref field } if field == "name"),
            "{:?}",
            err
        );
        assert_eq!(store.find(&model, &Filter::all()).await.unwrap().len(), 1);

        // Index creation is repeatable
        tokio_test::assert_ok!(store.sync_indexes(&model).await);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL and a local PostgreSQL"]
    async fn test_missing_required_field_is_not_written() {
        let Some((store, model)) = store_for(&PG_CATEGORY_SCHEMA).await else {
            return;
        };

        let err = store
            .insert(&model, body(json!({ "label": "no name" })))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store
            .find(&model, &Filter::all().eq("label", "no name"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL and a local PostgreSQL"]
    async fn test_find_agrees_with_memory_store() {
        let Some((store, model)) = store_for(&PG_RECORD_SCHEMA).await else {
            return;
        };
        let memory = MemoryStore::new();

        for doc in [
            json!({ "tags": ["a", "b"], "meta": { "x": 1, "y": 2 }, "n": 1, "status": "paid" }),
            json!({ "tags": ["a"], "meta": { "x": 1 }, "n": 2, "status": "paid" }),
            json!({ "status": "pending" }),
        ] {
            store.insert(&model, body(doc.clone())).await.unwrap();
            memory.insert(&model, body(doc)).await.unwrap();
        }

        let filters = [
            Filter::all(),
            Filter::all().eq("status", "paid"),
            Filter::all().eq("tags", json!(["a"])),
            Filter::all().eq("meta", json!({ "x": 1 })),
            Filter::all().eq("n", 1.0),
            Filter::all().eq("n", "1"),
            Filter::all().eq("status", "paid").eq("n", 2),
            Filter::all().eq("missing", Value::Null),
        ];

        for filter in &filters {
            let from_pg: Vec<Map<String, Value>> = store
                .find(&model, filter)
                .await
                .unwrap()
                .into_iter()
                .map(|d| d.body)
                .collect();
            let from_memory: Vec<Map<String, Value>> = memory
                .find(&model, filter)
                .await
                .unwrap()
                .into_iter()
                .map(|d| d.body)
                .collect();

            assert_eq!(from_pg, from_memory, "{:?}", filter);
        }
    }
}
