mod cost_category_dto;

pub use cost_category_dto::*;
