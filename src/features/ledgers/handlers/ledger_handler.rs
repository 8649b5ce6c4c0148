use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::store::Filter;
use crate::features::ledgers::models::LedgerKind;
use crate::features::ledgers::services::LedgerService;
use crate::shared::plain::PlainRecord;
use crate::shared::types::{ApiResponse, Meta};

async fn list(
    service: &LedgerService,
    kind: LedgerKind,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    let records = service.list(kind, &Filter::all()).await?;
    let meta = Meta::total(records.len());
    Ok(Json(ApiResponse::success(Some(records), None, Some(meta))))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<PlainRecord>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "ledgers"
)]
pub async fn list_orders(
    State(service): State<Arc<LedgerService>>,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    list(&service, LedgerKind::Orders).await
}

/// List all gift transactions
#[utoipa::path(
    get,
    path = "/api/gift-transactions",
    responses(
        (status = 200, description = "List of gift transactions", body = ApiResponse<Vec<PlainRecord>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "ledgers"
)]
pub async fn list_gift_transactions(
    State(service): State<Arc<LedgerService>>,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    list(&service, LedgerKind::GiftTransactions).await
}

/// List the spin history
#[utoipa::path(
    get,
    path = "/api/spin-history",
    responses(
        (status = 200, description = "List of spins", body = ApiResponse<Vec<PlainRecord>>),
        (status = 500, description = "Database unavailable")
    ),
    tag = "ledgers"
)]
pub async fn list_spin_history(
    State(service): State<Arc<LedgerService>>,
) -> Result<Json<ApiResponse<Vec<PlainRecord>>>> {
    list(&service, LedgerKind::SpinHistory).await
}
