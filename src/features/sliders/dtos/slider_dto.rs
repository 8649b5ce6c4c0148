use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sliders::models::{Slider, SliderImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SliderImageDto {
    #[validate(length(min = 1, message = "Image url must not be empty"))]
    pub url: String,
}

impl From<SliderImage> for SliderImageDto {
    fn from(image: SliderImage) -> Self {
        Self { url: image.url }
    }
}

/// Request DTO for creating a slider
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSliderDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, max = 255, message = "Title must be 1-255 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Description is required"),
        length(min = 1, max = 2000, message = "Description must be 1-2000 characters")
    )]
    pub description: Option<String>,

    /// Images in display order
    #[serde(default)]
    #[validate(nested)]
    pub images: Vec<SliderImageDto>,
}

impl CreateSliderDto {
    /// Document body for the store
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("title".to_string(), self.title.map_or(Value::Null, Value::String));
        body.insert(
            "description".to_string(),
            self.description.map_or(Value::Null, Value::String),
        );
        body.insert(
            "images".to_string(),
            Value::Array(
                self.images
                    .into_iter()
                    .map(|image| json!({ "url": image.url }))
                    .collect(),
            ),
        );
        body
    }
}

/// Response DTO for slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SliderResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub images: Vec<SliderImageDto>,
}

impl From<Slider> for SliderResponseDto {
    fn from(s: Slider) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            images: s.images.into_iter().map(Into::into).collect(),
        }
    }
}
