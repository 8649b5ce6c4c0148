mod model_handler;

pub use model_handler::*;
