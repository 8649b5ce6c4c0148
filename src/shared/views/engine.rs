//! Template engine for page rendering using Jinja2 syntax.
//!
//! Templates live in `templates/` and are compiled into the binary, so the
//! server does not depend on its working directory at runtime.

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Every template, keyed by the name it is rendered or included under
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("suspense.html", include_str!("../../../templates/suspense.html")),
    (
        "partials/props.html",
        include_str!("../../../templates/partials/props.html"),
    ),
    (
        "partials/record_table.html",
        include_str!("../../../templates/partials/record_table.html"),
    ),
    (
        "partials/payment_loader.html",
        include_str!("../../../templates/partials/payment_loader.html"),
    ),
    (
        "components/category_list.html",
        include_str!("../../../templates/components/category_list.html"),
    ),
    (
        "components/coupon_form.html",
        include_str!("../../../templates/components/coupon_form.html"),
    ),
    (
        "components/gift_list.html",
        include_str!("../../../templates/components/gift_list.html"),
    ),
    (
        "components/gift_form.html",
        include_str!("../../../templates/components/gift_form.html"),
    ),
    (
        "components/gift_transaction_list.html",
        include_str!("../../../templates/components/gift_transaction_list.html"),
    ),
    (
        "components/order_list.html",
        include_str!("../../../templates/components/order_list.html"),
    ),
    (
        "components/spin_history_list.html",
        include_str!("../../../templates/components/spin_history_list.html"),
    ),
    (
        "components/storefront.html",
        include_str!("../../../templates/components/storefront.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Render a template with the given context.
///
/// Templates ending in `.html` are auto-escaped.
pub fn render_template<S: Serialize>(template_name: &str, ctx: S) -> Result<String, TemplateError> {
    let env = TEMPLATE_ENV.get_or_init(init_environment);

    let template = env
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
