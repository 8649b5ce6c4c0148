//! Read-only transaction histories: orders, gift transactions and spins.
//!
//! Each ledger has a JSON list endpoint, a dashboard shell that renders a
//! loading placeholder, and a fragment route the shell fetches its content
//! from.
//!
//! ## Endpoints
//!
//! | Ledger | API | Page | Fragment |
//! |--------|-----|------|----------|
//! | orders | `/api/orders` | `/dashboard/orders` | `/fragments/orders` |
//! | gift transactions | `/api/gift-transactions` | `/dashboard/gift-transactions` | `/fragments/gift-transactions` |
//! | spin history | `/api/spin-history` | `/dashboard/spin-history` | `/fragments/spin-history` |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LedgerService;
