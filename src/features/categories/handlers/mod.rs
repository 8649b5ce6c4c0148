mod cost_category_handler;
mod page_handler;

pub use cost_category_handler::*;
pub use page_handler::*;
