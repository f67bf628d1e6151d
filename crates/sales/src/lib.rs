//! Sales history domain module.
//!
//! This crate contains the capacity-bounded sales ledger and the immutable
//! records it holds (no IO, no formatting).

pub mod ledger;
pub mod record;

pub use ledger::{MAX_SALES, SalesLedger};
pub use record::SaleRecord;
