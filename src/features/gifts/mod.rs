//! Gift management pages.
//!
//! The gift list is loaded by the browser through its fragment route; the
//! create and edit forms are rendered directly. Gift writes are not handled
//! here.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/gifts` | List gifts |
//! | GET | `/dashboard/gifts` | Gift list shell |
//! | GET | `/fragments/gifts` | Loaded gift list |
//! | GET | `/dashboard/gifts/create` | Create form |
//! | GET | `/dashboard/gifts/{id}/edit` | Edit form |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GiftService;
