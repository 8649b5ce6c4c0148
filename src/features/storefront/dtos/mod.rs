mod storefront_dto;

pub use storefront_dto::*;
