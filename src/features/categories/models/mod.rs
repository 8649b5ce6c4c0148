mod cost_category;

pub use cost_category::{CostCategory, COST_CATEGORY_SCHEMA};
