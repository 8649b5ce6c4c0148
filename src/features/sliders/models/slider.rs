use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::registry::{FieldSpec, ModelSchema};
use crate::core::store::{Document, StoreError};

pub static SLIDER_SCHEMA: ModelSchema = ModelSchema {
    name: "Slider",
    collection: "sliders",
    fields: &[
        FieldSpec::string("title").required(),
        FieldSpec::string("description").required(),
        FieldSpec::array("images"),
    ],
    timestamps: false,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderImage {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Slider {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub images: Vec<SliderImage>,
}

#[derive(Deserialize)]
struct SliderBody {
    title: String,
    description: String,
    #[serde(default)]
    images: Vec<SliderImage>,
}

impl TryFrom<Document> for Slider {
    type Error = StoreError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let body: SliderBody = doc.body_as()?;
        Ok(Self {
            id: doc.id,
            title: body.title,
            description: body.description,
            images: body.images,
        })
    }
}
