use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::gifts::handlers;
use crate::features::gifts::services::GiftService;

/// Create routes for the gifts feature
pub fn routes(service: Arc<GiftService>) -> Router {
    Router::new()
        .route("/api/gifts", get(handlers::list_gifts))
        .route("/dashboard/gifts", get(handlers::gifts_page))
        .route("/dashboard/gifts/create", get(handlers::create_gift_page))
        .route("/dashboard/gifts/{id}/edit", get(handlers::edit_gift_page))
        .route("/fragments/gifts", get(handlers::gifts_fragment))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::shared::test_helpers::{embedded_props, TestApp};

    #[tokio::test]
    async fn test_gift_shell_defers_to_fragment() {
        let app = TestApp::new();
        app.seed("Gift", json!({ "name": "Teddy bear" })).await;

        let shell = app.server.get("/dashboard/gifts").await.text();
        assert!(shell.contains("data-suspense-placeholder"));
        assert!(shell.contains("/fragments/gifts"));
        assert!(!shell.contains("Teddy bear"));

        let fragment = app.server.get("/fragments/gifts").await;
        assert_eq!(fragment.status_code(), StatusCode::OK);
        let html = fragment.text();
        assert!(!html.contains("data-suspense-placeholder"));
        assert_eq!(html.matches("data-component=\"gift-list\"").count(), 1);
        assert_eq!(embedded_props(&html, "gift-list")["gifts"][0]["name"], json!("Teddy bear"));
    }

    #[tokio::test]
    async fn test_gift_forms() {
        let app = TestApp::new();

        let create = app.server.get("/dashboard/gifts/create").await.text();
        assert_eq!(
            embedded_props(&create, "gift-form"),
            json!({ "mode": "create", "giftId": null })
        );

        // Unknown ids are passed through without a lookup
        let edit = app.server.get("/dashboard/gifts/not-a-real-id/edit").await;
        assert_eq!(edit.status_code(), StatusCode::OK);
        assert_eq!(
            embedded_props(&edit.text(), "gift-form"),
            json!({ "mode": "edit", "giftId": "not-a-real-id" })
        );
    }
}
