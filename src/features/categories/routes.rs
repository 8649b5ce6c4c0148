use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CostCategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CostCategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/dashboard/categories", get(handlers::categories_page))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use serde_json::{json, Value};

    use crate::shared::constants::NO_STORE;
    use crate::shared::test_helpers::{embedded_props, TestApp};

    #[tokio::test]
    async fn test_categories_page_with_no_categories() {
        let app = TestApp::new();

        let response = app.server.get("/dashboard/categories").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header(header::CACHE_CONTROL), NO_STORE);
        let props = embedded_props(&response.text(), "category-list");
        assert_eq!(props, json!({ "categories": [] }));
    }

    #[tokio::test]
    async fn test_categories_page_lists_stored_categories() {
        let app = TestApp::new();
        app.seed("CostCategory", json!({ "name": "Shipping" })).await;
        app.seed("CostCategory", json!({ "name": "Packaging" })).await;

        let response = app.server.get("/dashboard/categories").await;

        let props = embedded_props(&response.text(), "category-list");
        let names: Vec<&str> = props["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Shipping", "Packaging"]);
    }

    #[tokio::test]
    async fn test_create_category_then_duplicate() {
        let app = TestApp::new();

        let first = app
            .server
            .post("/api/categories")
            .json(&json!({ "name": "Shipping" }))
            .await;
        assert_eq!(first.status_code(), StatusCode::CREATED);
        let body: Value = first.json();
        assert_eq!(body["data"]["name"], json!("Shipping"));
        assert!(body["data"]["createdAt"].is_string());

        let second = app
            .server
            .post("/api/categories")
            .json(&json!({ "name": "Shipping" }))
            .await;
        assert_eq!(second.status_code(), StatusCode::CONFLICT);
        let body: Value = second.json();
        assert_eq!(body["success"], json!(false));

        assert_eq!(app.count("CostCategory").await, 1);
    }

    #[tokio::test]
    async fn test_create_category_without_name() {
        let app = TestApp::new();

        for body in [json!({}), json!({ "name": "" })] {
            let response = app.server.post("/api/categories").json(&body).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(app.count("CostCategory").await, 0);
    }

    #[tokio::test]
    async fn test_list_categories_api() {
        let app = TestApp::new();
        app.seed("CostCategory", json!({ "name": "Marketing" })).await;

        let body: Value = app.server.get("/api/categories").await.json();

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["meta"]["total"], json!(1));
        assert_eq!(body["data"][0]["name"], json!("Marketing"));
    }
}
