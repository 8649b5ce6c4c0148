use minijinja::context;

use super::engine::{render_template, TemplateError};
use crate::shared::constants::{PAYMENT_SCRIPT_ELEMENT_ID, PAYMENT_SCRIPT_URL};

/// Client-side loader for the hosted payment SDK.
///
/// The rendered snippet injects the script once per document, dispatches
/// `payment-sdk:ready` on load and `payment-sdk:error` on failure. A failed
/// load is logged to the console and never retried.
#[derive(Debug, Clone, Copy)]
pub struct PaymentScriptLoader {
    url: &'static str,
    element_id: &'static str,
}

impl Default for PaymentScriptLoader {
    fn default() -> Self {
        Self {
            url: PAYMENT_SCRIPT_URL,
            element_id: PAYMENT_SCRIPT_ELEMENT_ID,
        }
    }
}

impl PaymentScriptLoader {
    pub fn render(&self) -> Result<String, TemplateError> {
        render_template(
            "partials/payment_loader.html",
            context! { url => self.url, element_id => self.element_id },
        )
    }
}
