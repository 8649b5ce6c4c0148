//! Introspection of the registered record shapes.

pub mod dtos;
pub mod handlers;
pub mod routes;
