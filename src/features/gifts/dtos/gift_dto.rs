use serde::Serialize;

use crate::shared::plain::PlainRecord;

/// Props for the gift list component
#[derive(Debug, Serialize)]
pub struct GiftListProps {
    pub gifts: Vec<PlainRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftFormMode {
    Create,
    Edit,
}

/// Props for the gift form. `gift_id` is passed through as given.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftFormProps {
    pub mode: GiftFormMode,
    pub gift_id: Option<String>,
}

impl GiftFormProps {
    pub fn create() -> Self {
        Self {
            mode: GiftFormMode::Create,
            gift_id: None,
        }
    }

    pub fn edit(gift_id: String) -> Self {
        Self {
            mode: GiftFormMode::Edit,
            gift_id: Some(gift_id),
        }
    }
}
