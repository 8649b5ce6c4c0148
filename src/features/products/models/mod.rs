mod product;

pub use product::PRODUCT_SCHEMA;
