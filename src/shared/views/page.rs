use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Value};
use serde::Serialize;

use super::component::Component;
use super::engine::{render_template, TemplateError};
use super::payment::PaymentScriptLoader;
use super::suspense::{Loadable, SuspenseBoundary};
use crate::core::error::AppError;
use crate::shared::constants::NO_STORE;

/// A full HTML page: the layout shell around one rendered component or
/// suspense boundary. Pages are never cached.
#[derive(Debug)]
pub struct Page {
    title: String,
    content: String,
    payment_loader: bool,
}

impl Page {
    /// Server path: render the component with props fetched by the handler
    pub fn component<P: Serialize>(
        title: impl Into<String>,
        component: Component,
        props: &P,
    ) -> Result<Self, AppError> {
        Ok(Self {
            title: title.into(),
            content: component.render(props)?,
            payment_loader: false,
        })
    }

    /// Client path: render the boundary's placeholder, the browser fetches the rest
    pub fn suspense(title: impl Into<String>, boundary: &SuspenseBoundary) -> Result<Self, AppError> {
        Ok(Self {
            title: title.into(),
            content: boundary.render(&Loadable::<()>::Loading)?,
            payment_loader: false,
        })
    }

    /// Include the payment SDK loader in this page
    pub fn with_payment_loader(mut self) -> Self {
        self.payment_loader = true;
        self
    }

    pub fn render(&self) -> Result<String, TemplateError> {
        let payment_loader = if self.payment_loader {
            PaymentScriptLoader::default().render()?
        } else {
            String::new()
        };

        render_template(
            "layout.html",
            context! {
                title => &self.title,
                content => Value::from_safe_string(self.content.clone()),
                payment_loader => Value::from_safe_string(payment_loader),
            },
        )
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => html_response(StatusCode::OK, html),
            Err(e) => PageError(e.into()).into_response(),
        }
    }
}

/// Request-level failure on an HTML route, rendered as an error page
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message, _) = self.0.parts();
        let title = status.canonical_reason().unwrap_or("Error");

        match render_template(
            "error.html",
            context! { status => status.as_u16(), title => title, message => &message },
        ) {
            Ok(html) => html_response(status, html),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}

pub(crate) fn html_response(status: StatusCode, html: String) -> Response {
    (status, [(header::CACHE_CONTROL, NO_STORE)], Html(html)).into_response()
}
