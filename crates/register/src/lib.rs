//! Register session: couples the item catalog and the sales ledger.
//!
//! - [`transaction::sell`] is the one operation that touches both stores; it is
//!   all-or-nothing.
//! - [`report`] holds read-only queries shaped for a presentation layer.
//! - [`Register`] owns the stores, the running item-id counter, the clock and
//!   the stock generator for one interactive session.
//!
//! Nothing here is designed for concurrent mutation. Share a `Register`
//! across threads only behind one coarse lock (e.g. `Mutex<Register>`).

pub mod config;
pub mod register;
pub mod report;
pub mod transaction;

pub use config::{ConfigError, MAX_CATALOG_SLOTS, RegisterConfig};
pub use register::{Register, RegisterBuilder};
pub use report::{ItemRow, RegisterSummary, SaleRow};
pub use transaction::Sale;
