mod gift_handler;
mod page_handler;

pub use gift_handler::*;
pub use page_handler::*;
