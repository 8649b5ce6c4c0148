mod ledger_handler;
mod page_handler;

pub use ledger_handler::*;
pub use page_handler::*;
