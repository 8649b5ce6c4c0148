use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::registry::{FieldSpec, ModelSchema};
use crate::core::store::{Document, StoreError};

/// `name` is unique across every cost category
pub static COST_CATEGORY_SCHEMA: ModelSchema = ModelSchema {
    name: "CostCategory",
    collection: "cost_categories",
    fields: &[FieldSpec::string("name").required().unique()],
    timestamps: true,
};

#[derive(Debug, Clone)]
pub struct CostCategory {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct CostCategoryBody {
    name: String,
}

impl TryFrom<Document> for CostCategory {
    type Error = StoreError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let body: CostCategoryBody = doc.body_as()?;
        Ok(Self {
            id: doc.id,
            name: body.name,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
