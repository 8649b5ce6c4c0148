use std::sync::Arc;

use axum::extract::State;

use crate::core::store::Filter;
use crate::features::sliders::SliderService;
use crate::features::storefront::dtos::StorefrontProps;
use crate::shared::views::{Component, Page, PageError};

/// Storefront root. Loads the payment SDK so checkout can open the widget.
pub async fn storefront_page(
    State(sliders): State<Arc<SliderService>>,
) -> Result<Page, PageError> {
    let sliders = sliders.list(&Filter::all()).await?;

    let page = Page::component("Shop", Component::Storefront, &StorefrontProps { sliders })?;
    Ok(page.with_payment_loader())
}
