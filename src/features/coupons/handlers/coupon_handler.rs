use std::sync::Arc;

use axum::extract::State;

use crate::core::store::Filter;
use crate::features::coupons::dtos::CouponFormProps;
use crate::features::products::ProductService;
use crate::shared::views::{Component, Page, PageError};

/// Coupon creation form with every product selectable
pub async fn create_coupon_page(
    State(products): State<Arc<ProductService>>,
) -> Result<Page, PageError> {
    let products = products.list(&Filter::all()).await?;

    Ok(Page::component(
        "Create coupon",
        Component::CouponForm,
        &CouponFormProps { products },
    )?)
}
