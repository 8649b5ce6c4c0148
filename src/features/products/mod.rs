//! Product catalogue, read-only here.
//!
//! Product documents are written by the storefront back office; this service
//! only lists them, passing every field through unchanged.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
