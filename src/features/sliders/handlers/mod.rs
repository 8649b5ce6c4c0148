mod slider_handler;

pub use slider_handler::*;
