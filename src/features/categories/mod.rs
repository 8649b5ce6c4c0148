//! Cost categories used to classify shop expenses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List cost categories |
//! | POST | `/api/categories` | Create a cost category |
//! | GET | `/dashboard/categories` | Category listing page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CostCategoryService;
