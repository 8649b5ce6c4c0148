use minijinja::{context, Value};
use serde::Serialize;

use super::engine::{render_template, TemplateError};

/// Presentation components. Each one receives already-fetched props and owns
/// its markup; the page shell never looks inside the props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    CategoryList,
    CouponForm,
    GiftList,
    GiftForm,
    GiftTransactionList,
    OrderList,
    SpinHistoryList,
    Storefront,
}

impl Component {
    /// Stable name used in `data-component` attributes
    pub fn slug(&self) -> &'static str {
        match self {
            Component::CategoryList => "category-list",
            Component::CouponForm => "coupon-form",
            Component::GiftList => "gift-list",
            Component::GiftForm => "gift-form",
            Component::GiftTransactionList => "gift-transaction-list",
            Component::OrderList => "order-list",
            Component::SpinHistoryList => "spin-history-list",
            Component::Storefront => "storefront",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Component::CategoryList => "components/category_list.html",
            Component::CouponForm => "components/coupon_form.html",
            Component::GiftList => "components/gift_list.html",
            Component::GiftForm => "components/gift_form.html",
            Component::GiftTransactionList => "components/gift_transaction_list.html",
            Component::OrderList => "components/order_list.html",
            Component::SpinHistoryList => "components/spin_history_list.html",
            Component::Storefront => "components/storefront.html",
        }
    }

    /// Render the component. The exact props are embedded next to the markup
    /// as a JSON document so client code can hydrate from them.
    pub fn render<P: Serialize>(&self, props: &P) -> Result<String, TemplateError> {
        let props_json = props_json(props)?;

        render_template(
            self.template(),
            context! {
                component => self.slug(),
                props => Value::from_serialize(props),
                props_json => Value::from_safe_string(props_json),
            },
        )
    }
}

/// JSON for an inline `<script type="application/json">` block.
///
/// `<` is escaped so string values can never close the script element.
fn props_json<P: Serialize>(props: &P) -> Result<String, TemplateError> {
    let json = serde_json::to_string(props)
        .map_err(|e| TemplateError::RenderError(format!("Failed to serialize props: {}", e)))?;
    Ok(json.replace('<', "\\u003c"))
}
