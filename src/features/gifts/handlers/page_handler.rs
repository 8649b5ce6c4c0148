use std::sync::Arc;

use axum::extract::{Path, State};

use crate::core::store::Filter;
use crate::features::gifts::dtos::{GiftFormProps, GiftListProps};
use crate::features::gifts::services::GiftService;
use crate::shared::views::{Component, Fragment, Page, PageError, SuspenseBoundary};

pub const GIFT_LIST: SuspenseBoundary =
    SuspenseBoundary::new(Component::GiftList, "/fragments/gifts");

/// Gift list shell; the list itself is fetched from [`GIFT_LIST`]'s source
pub async fn gifts_page() -> Result<Page, PageError> {
    Ok(Page::suspense("Gifts", &GIFT_LIST)?)
}

pub async fn gifts_fragment(State(service): State<Arc<GiftService>>) -> Fragment {
    let outcome = service
        .list(&Filter::all())
        .await
        .map(|gifts| GiftListProps { gifts });

    Fragment::resolve(GIFT_LIST, outcome)
}

pub async fn create_gift_page() -> Result<Page, PageError> {
    Ok(Page::component(
        "Create gift",
        Component::GiftForm,
        &GiftFormProps::create(),
    )?)
}

/// The id is not looked up; the form loads the gift itself
pub async fn edit_gift_page(Path(id): Path<String>) -> Result<Page, PageError> {
    Ok(Page::component(
        "Edit gift",
        Component::GiftForm,
        &GiftFormProps::edit(id),
    )?)
}
