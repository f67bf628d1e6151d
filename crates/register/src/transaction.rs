//! The sell transaction: stock withdrawal and sale record as one step.
//!
//! Policy when the ledger is full: reject before mutating. Availability is
//! checked on a shared borrow, then the record is appended, and only then is
//! the stock withdrawn. A full ledger therefore fails before the catalog is
//! touched, and a rejected sale leaves catalog and ledger exactly as they were.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cashreg_core::{DomainError, DomainResult, ItemId, Quantity};
use cashreg_inventory::Catalog;
use cashreg_sales::{SaleRecord, SalesLedger};

/// Outcome of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    /// Ledger slot the record was written to.
    pub slot: usize,
    pub record: SaleRecord,
    /// Stock left on the item after the sale.
    pub remaining: Quantity,
}

/// Sell `quantity` units of `item_id`, stamping the record with `sold_at`.
///
/// Fails with `ItemNotFound`, `InsufficientStock` (carrying the available
/// quantity) or `CapacityExceeded`; no state changes in any failure case.
pub fn sell(
    catalog: &mut Catalog,
    ledger: &mut SalesLedger,
    item_id: ItemId,
    quantity: Quantity,
    sold_at: DateTime<Utc>,
) -> DomainResult<Sale> {
    if quantity.is_zero() {
        return Err(DomainError::validation("sale quantity must be positive"));
    }

    let item = catalog
        .find_by_id(item_id)
        .ok_or_else(|| DomainError::item_not_found(item_id))?;
    if item.quantity() < quantity {
        return Err(DomainError::insufficient_stock(
            item_id,
            quantity,
            item.quantity(),
        ));
    }

    // Price is captured before the stock moves.
    let total_amount = item.unit_price().times(quantity);
    let record = SaleRecord::new(item_id, quantity, total_amount, sold_at);
    let slot = ledger.append(record.clone())?;

    // Availability was checked above, with no mutation in between.
    let remaining = catalog.withdraw(item_id, quantity)?;
    Ok(Sale {
        slot,
        record,
        remaining,
    })
}
