use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::registry::{Model, ModelRegistry, RegistryError};
use crate::core::store::{DocumentStore, Filter};
use crate::features::sliders::dtos::{CreateSliderDto, SliderResponseDto};
use crate::features::sliders::models::{Slider, SLIDER_SCHEMA};

/// Service for slider operations
pub struct SliderService {
    store: Arc<dyn DocumentStore>,
    model: Arc<Model>,
}

impl SliderService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: &ModelRegistry,
    ) -> std::result::Result<Self, RegistryError> {
        let model = registry.register(&SLIDER_SCHEMA)?;
        Ok(Self { store, model })
    }

    /// List sliders matching `filter` in insertion order
    pub async fn list(&self, filter: &Filter) -> Result<Vec<SliderResponseDto>> {
        let docs = self.store.find(&self.model, filter).await.map_err(|e| {
            tracing::error!("Failed to list sliders: {}", e);
            AppError::from(e)
        })?;

        docs.into_iter()
            .map(|doc| Slider::try_from(doc).map(Into::into).map_err(AppError::from))
            .collect()
    }

    pub async fn create(&self, dto: CreateSliderDto) -> Result<SliderResponseDto> {
        let doc = self.store.insert(&self.model, dto.into_body()).await?;
        let slider = Slider::try_from(doc)?;

        tracing::info!(
            "Slider created: id={}, images={}",
            slider.id,
            slider.images.len()
        );

        Ok(slider.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::features::sliders::dtos::SliderImageDto;

    fn service() -> SliderService {
        SliderService::new(Arc::new(MemoryStore::new()), &ModelRegistry::new()).unwrap()
    }

    fn dto(title: Option<&str>, description: Option<&str>) -> CreateSliderDto {
        CreateSliderDto {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            images: vec![
                SliderImageDto {
                    url: "https://cdn.example.com/a.jpg".to_string(),
                },
                SliderImageDto {
                    url: "https://cdn.example.com/b.jpg".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_create_keeps_image_order() {
        let service = service();

        let slider = service
            .create(dto(Some("Holiday sale"), Some("Up to 50% off")))
            .await
            .unwrap();

        let urls: Vec<&str> = slider.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"]
        );
        assert_eq!(service.list(&Filter::all()).await.unwrap(), vec![slider]);
    }

    #[tokio::test]
    async fn test_missing_title_or_description_is_rejected() {
        let service = service();

        let no_title = service.create(dto(None, Some("desc"))).await.unwrap_err();
        let no_description = service.create(dto(Some("title"), None)).await.unwrap_err();

        assert!(matches!(no_title, AppError::Validation(_)));
        assert!(matches!(no_description, AppError::Validation(_)));
        assert!(service.list(&Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_titles_are_allowed() {
        let service = service();

        service.create(dto(Some("Promo"), Some("one"))).await.unwrap();
        service.create(dto(Some("Promo"), Some("two"))).await.unwrap();

        let filtered = service
            .list(&Filter::all().eq("description", "two"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }
}
