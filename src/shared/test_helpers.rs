//! Fixtures for HTTP-level tests against the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Map, Value};

use crate::app::{router, AppServices};
use crate::core::registry::{Model, ModelRegistry};
use crate::core::store::{Document, DocumentStore, Filter, MemoryStore, StoreError};

/// Application router served over an in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub registry: Arc<ModelRegistry>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let registry = Arc::new(ModelRegistry::new());
        let services = AppServices::new(store.clone(), Arc::clone(&registry))
            .expect("register models");
        let server = TestServer::new(router(&services)).expect("start test server");

        Self {
            server,
            store,
            registry,
        }
    }

    /// Insert a document directly, bypassing the API
    pub async fn seed(&self, model: &str, body: Value) -> Document {
        let model = self.registry.get(model).expect("model is registered");
        let body = body.as_object().cloned().expect("body is an object");
        self.store.insert(&model, body).await.expect("seed document")
    }

    pub async fn count(&self, model: &str) -> usize {
        let model = self.registry.get(model).expect("model is registered");
        self.store
            .find(&model, &Filter::all())
            .await
            .expect("query store")
            .len()
    }
}

/// Test server whose store is the given backend
pub fn server_with_store(store: Arc<dyn DocumentStore>) -> TestServer {
    let services =
        AppServices::new(store, Arc::new(ModelRegistry::new())).expect("register models");
    TestServer::new(router(&services)).expect("start test server")
}

/// A store whose database never answers
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn find(&self, _model: &Model, _filter: &Filter) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
    }

    async fn insert(
        &self,
        _model: &Model,
        _body: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
    }

    async fn sync_indexes(&self, _model: &Model) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Props embedded next to `component` in rendered HTML
pub fn embedded_props(html: &str, component: &str) -> Value {
    let marker = format!(
        r#"<script type="application/json" data-props-for="{}">"#,
        component
    );
    let start = html.find(&marker).expect("props script present") + marker.len();
    let end = start + html[start..].find("</script>").expect("props script closed");
    serde_json::from_str(&html[start..end]).expect("props are JSON")
}
