mod model_dto;

pub use model_dto::*;
