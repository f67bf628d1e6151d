//! Inventory domain module.
//!
//! This crate owns the item catalog: batch insertion with generated stock,
//! order-preserving removal, lookup and enumeration. It is deterministic domain
//! logic (no IO); randomness is injected through [`StockGenerator`].

pub mod catalog;
pub mod item;
pub mod stock;

pub use catalog::{Catalog, INITIAL_CATALOG_SLOTS, MAX_BATCH};
pub use item::Item;
pub use stock::{RandomStock, ScriptedStock, StockGenerator};
