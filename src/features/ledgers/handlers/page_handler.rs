use std::sync::Arc;

use axum::extract::State;

use crate::core::store::Filter;
use crate::features::ledgers::models::LedgerKind;
use crate::features::ledgers::services::LedgerService;
use crate::shared::views::{Fragment, Page, PageError};

fn shell(kind: LedgerKind) -> Result<Page, PageError> {
    Ok(Page::suspense(kind.title(), &kind.boundary())?)
}

async fn fragment(service: &LedgerService, kind: LedgerKind) -> Fragment {
    let outcome = service
        .list(kind, &Filter::all())
        .await
        .map(|records| kind.props(records));

    Fragment::resolve(kind.boundary(), outcome)
}

pub async fn orders_page() -> Result<Page, PageError> {
    shell(LedgerKind::Orders)
}

pub async fn orders_fragment(State(service): State<Arc<LedgerService>>) -> Fragment {
    fragment(&service, LedgerKind::Orders).await
}

pub async fn gift_transactions_page() -> Result<Page, PageError> {
    shell(LedgerKind::GiftTransactions)
}

pub async fn gift_transactions_fragment(State(service): State<Arc<LedgerService>>) -> Fragment {
    fragment(&service, LedgerKind::GiftTransactions).await
}

pub async fn spin_history_page() -> Result<Page, PageError> {
    shell(LedgerKind::SpinHistory)
}

pub async fn spin_history_fragment(State(service): State<Arc<LedgerService>>) -> Fragment {
    fragment(&service, LedgerKind::SpinHistory).await
}
