use serde_json::{Map, Value};

use crate::core::registry::ModelSchema;
use crate::shared::plain::PlainRecord;
use crate::shared::views::{Component, SuspenseBoundary};

pub static ORDER_SCHEMA: ModelSchema = ModelSchema {
    name: "Order",
    collection: "orders",
    fields: &[],
    timestamps: true,
};

pub static GIFT_TRANSACTION_SCHEMA: ModelSchema = ModelSchema {
    name: "GiftTransaction",
    collection: "gift_transactions",
    fields: &[],
    timestamps: true,
};

pub static SPIN_HISTORY_SCHEMA: ModelSchema = ModelSchema {
    name: "SpinHistory",
    collection: "spin_histories",
    fields: &[],
    timestamps: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Orders,
    GiftTransactions,
    SpinHistory,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 3] = [
        LedgerKind::Orders,
        LedgerKind::GiftTransactions,
        LedgerKind::SpinHistory,
    ];

    pub fn schema(&self) -> &'static ModelSchema {
        match self {
            LedgerKind::Orders => &ORDER_SCHEMA,
            LedgerKind::GiftTransactions => &GIFT_TRANSACTION_SCHEMA,
            LedgerKind::SpinHistory => &SPIN_HISTORY_SCHEMA,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LedgerKind::Orders => "Orders",
            LedgerKind::GiftTransactions => "Gift transactions",
            LedgerKind::SpinHistory => "Spin history",
        }
    }

    pub fn boundary(&self) -> SuspenseBoundary {
        match self {
            LedgerKind::Orders => SuspenseBoundary::new(Component::OrderList, "/fragments/orders"),
            LedgerKind::GiftTransactions => SuspenseBoundary::new(
                Component::GiftTransactionList,
                "/fragments/gift-transactions",
            ),
            LedgerKind::SpinHistory => {
                SuspenseBoundary::new(Component::SpinHistoryList, "/fragments/spin-history")
            }
        }
    }

    /// Props key the list component reads its records from
    fn props_key(&self) -> &'static str {
        match self {
            LedgerKind::Orders => "orders",
            LedgerKind::GiftTransactions => "transactions",
            LedgerKind::SpinHistory => "spins",
        }
    }

    pub fn props(&self, records: Vec<PlainRecord>) -> Map<String, Value> {
        let records = records
            .into_iter()
            .map(|record| Value::Object(record.0))
            .collect();

        let mut props = Map::new();
        props.insert(self.props_key().to_string(), Value::Array(records));
        props
    }
}
