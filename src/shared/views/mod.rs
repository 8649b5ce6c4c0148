//! Server-side rendering of dashboard pages.
//!
//! Presentation components are minijinja templates embedded in the binary.
//! Server-path routes render a full [`Page`] with the component's props; the
//! client-path routes render a [`SuspenseBoundary`] shell whose placeholder is
//! swapped for a [`Fragment`] once the browser has fetched it.

mod component;
mod engine;
mod page;
mod payment;
mod suspense;

pub use component::Component;
pub use engine::TemplateError;
pub use page::{Page, PageError};
pub use suspense::{Fragment, SuspenseBoundary};
