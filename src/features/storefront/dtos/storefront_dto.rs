use serde::Serialize;

use crate::features::sliders::dtos::SliderResponseDto;

#[derive(Debug, Serialize)]
pub struct StorefrontProps {
    pub sliders: Vec<SliderResponseDto>,
}
