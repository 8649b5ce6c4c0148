use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::CostCategory;

/// Request DTO for creating a cost category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostCategoryDto {
    /// Category name, unique across all categories
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 255, message = "Name must be 1-255 characters")
    )]
    pub name: Option<String>,
}

impl CreateCostCategoryDto {
    /// Document body for the store
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("name".to_string(), self.name.map_or(Value::Null, Value::String));
        body
    }
}

/// Response DTO for cost category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CostCategory> for CostCategoryResponseDto {
    fn from(c: CostCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Props for the category listing component
#[derive(Debug, Serialize)]
pub struct CategoryListProps {
    pub categories: Vec<CostCategoryResponseDto>,
}
