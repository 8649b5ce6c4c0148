//! Storefront slider banners.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/sliders` | List sliders |
//! | POST | `/api/sliders` | Create a slider |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SliderService;
