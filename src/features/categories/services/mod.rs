mod cost_category_service;

pub use cost_category_service::CostCategoryService;
