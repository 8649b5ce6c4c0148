use crate::core::registry::ModelSchema;

/// Shape is owned by the catalogue; no field is checked here
pub static PRODUCT_SCHEMA: ModelSchema = ModelSchema {
    name: "Product",
    collection: "products",
    fields: &[],
    timestamps: true,
};
