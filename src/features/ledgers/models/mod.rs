mod ledger;

pub use ledger::LedgerKind;
