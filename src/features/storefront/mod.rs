//! Public storefront landing page: slider banners plus the payment SDK loader.

pub mod dtos;
pub mod handlers;
pub mod routes;
