//! Read-only report queries over the catalog and the sales ledger.
//!
//! Rows are plain serializable structs; turning them into text tables is the
//! presentation layer's job.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cashreg_core::{Amount, Entity, ItemId, Quantity, UnitPrice};
use cashreg_inventory::{Catalog, Item};
use cashreg_sales::{SaleRecord, SalesLedger};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub quantity: Quantity,
    pub unit_price: UnitPrice,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRow {
    pub item_id: ItemId,
    pub quantity_sold: Quantity,
    pub total_amount: Amount,
    pub sold_at: DateTime<Utc>,
}

impl From<&SaleRecord> for SaleRow {
    fn from(record: &SaleRecord) -> Self {
        Self {
            item_id: record.item_id(),
            quantity_sold: record.quantity_sold(),
            total_amount: record.total_amount(),
            sold_at: record.sold_at(),
        }
    }
}

/// Headline numbers for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterSummary {
    pub items: usize,
    pub units_in_stock: u64,
    pub catalog_capacity: usize,
    pub sales: usize,
    pub revenue: Amount,
    pub ledger_remaining: usize,
}

pub fn item_rows(catalog: &Catalog) -> Vec<ItemRow> {
    catalog.list_non_empty().map(ItemRow::from).collect()
}

pub fn sales_rows(ledger: &SalesLedger) -> Vec<SaleRow> {
    ledger.list_all().map(SaleRow::from).collect()
}

/// Sort the ledger by item id (the new order persists) and list it.
pub fn sorted_sales_rows(ledger: &mut SalesLedger) -> Vec<SaleRow> {
    ledger.sort_by_item_id();
    sales_rows(ledger)
}

pub fn summary(catalog: &Catalog, ledger: &SalesLedger) -> RegisterSummary {
    RegisterSummary {
        items: catalog.len(),
        units_in_stock: catalog
            .list_non_empty()
            .map(|item| u64::from(item.quantity().get()))
            .sum(),
        catalog_capacity: catalog.capacity(),
        sales: ledger.len(),
        revenue: ledger.total_revenue(),
        ledger_remaining: ledger.remaining(),
    }
}
