mod slider;

pub use slider::{Slider, SliderImage, SLIDER_SCHEMA};
