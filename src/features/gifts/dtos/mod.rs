mod gift_dto;

pub use gift_dto::*;
