use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::registry::{FieldSpec, Model};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldDescriptorDto {
    pub name: String,
    /// `string` or `array`
    pub kind: String,
    pub required: bool,
    pub unique: bool,
}

impl From<&FieldSpec> for FieldDescriptorDto {
    fn from(field: &FieldSpec) -> Self {
        Self {
            name: field.name.to_string(),
            kind: field.kind.as_str().to_string(),
            required: field.required,
            unique: field.unique,
        }
    }
}

/// A registered model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelDescriptorDto {
    pub name: String,
    pub collection: String,
    pub timestamps: bool,
    pub fields: Vec<FieldDescriptorDto>,
}

impl From<&Model> for ModelDescriptorDto {
    fn from(model: &Model) -> Self {
        Self {
            name: model.name().to_string(),
            collection: model.collection().to_string(),
            timestamps: model.timestamps(),
            fields: model.fields().iter().map(Into::into).collect(),
        }
    }
}
