use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use minijinja::context;
use serde::Serialize;

use super::component::Component;
use super::engine::{render_template, TemplateError};
use super::page::{html_response, PageError};
use crate::core::error::AppError;

/// State of a client-side data dependency.
///
/// Leaves `Loading` at most once; `Loaded` and `Failed` are final.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    /// Settle a pending state with the fetch outcome. Settled states are kept.
    pub fn resolve<E: Display>(self, outcome: Result<T, E>) -> Self {
        match self {
            Loadable::Loading => match outcome {
                Ok(value) => Loadable::Loaded(value),
                Err(e) => Loadable::Failed(e.to_string()),
            },
            settled => settled,
        }
    }
}

/// A component whose data is fetched by the browser after the shell renders.
///
/// `source` is the fragment route that renders the loaded component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspenseBoundary {
    component: Component,
    source: &'static str,
}

impl SuspenseBoundary {
    pub const fn new(component: Component, source: &'static str) -> Self {
        Self { component, source }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn render<T: Serialize>(&self, state: &Loadable<T>) -> Result<String, TemplateError> {
        match state {
            Loadable::Loading => render_template(
                "suspense.html",
                context! {
                    state => "loading",
                    component => self.component.slug(),
                    source => self.source,
                },
            ),
            Loadable::Loaded(props) => self.component.render(props),
            Loadable::Failed(message) => render_template(
                "suspense.html",
                context! {
                    state => "failed",
                    component => self.component.slug(),
                    message => message,
                },
            ),
        }
    }
}

/// Settled content for a suspense boundary, served from its fragment route
#[derive(Debug)]
pub struct Fragment {
    boundary: SuspenseBoundary,
    state: Loadable<serde_json::Value>,
}

impl Fragment {
    pub fn resolve<T: Serialize>(boundary: SuspenseBoundary, outcome: Result<T, AppError>) -> Self {
        let outcome = outcome
            .and_then(|props| {
                serde_json::to_value(props)
                    .map_err(|e| AppError::Internal(format!("Failed to serialize props: {}", e)))
            })
            .map_err(|err| {
                tracing::warn!("Fragment {} failed: {}", boundary.source(), err);
                // parts() logs server-side causes and yields the public message
                err.parts().1
            });

        Self {
            boundary,
            state: Loadable::Loading.resolve(outcome),
        }
    }
}

impl IntoResponse for Fragment {
    fn into_response(self) -> Response {
        let status = match self.state {
            Loadable::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        };

        match self.boundary.render(&self.state) {
            Ok(html) => html_response(status, html),
            Err(e) => PageError(e.into()).into_response(),
        }
    }
}
