// Ledger input: line items loaded from CSV or built from defaults.
pub mod ledger;
pub mod ledger_csv;

pub use ledger::{Ledger, LedgerKind};
pub use ledger_csv::LedgerCsvParser;
