use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::coupons::handlers;
use crate::features::products::ProductService;

/// Create routes for the coupons feature
pub fn routes(products: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/dashboard/coupons/create",
            get(handlers::create_coupon_page),
        )
        .with_state(products)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use serde_json::json;

    use crate::shared::test_helpers::{embedded_props, TestApp};

    #[tokio::test]
    async fn test_coupon_form_receives_every_product() {
        let app = TestApp::new();
        let mut ids = Vec::new();
        for price in [25000, 40000, 95000] {
            let name: String = Word().fake();
            let doc = app
                .seed("Product", json!({ "name": name, "price": price }))
                .await;
            ids.push(doc.id.to_string());
        }

        let response = app.server.get("/dashboard/coupons/create").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let props = embedded_props(&response.text(), "coupon-form");
        let products = props["products"].as_array().unwrap();
        assert_eq!(products.len(), 3);
        let returned: Vec<&str> = products.iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert_eq!(returned, ids);
        assert_eq!(products[2]["price"], json!(95000));
    }

    #[tokio::test]
    async fn test_coupon_form_without_products() {
        let app = TestApp::new();

        let response = app.server.get("/dashboard/coupons/create").await;

        let props = embedded_props(&response.text(), "coupon-form");
        assert_eq!(props, json!({ "products": [] }));
    }
}
