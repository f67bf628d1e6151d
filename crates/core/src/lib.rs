//! `cashreg-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, the
//! sales ledger and the register session (no IO, no input parsing, no output).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use value_object::{Amount, Quantity, UnitPrice, ValueObject};
