use crate::core::registry::ModelSchema;

pub static GIFT_SCHEMA: ModelSchema = ModelSchema {
    name: "Gift",
    collection: "gifts",
    fields: &[],
    timestamps: true,
};
