use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cashreg_core::{Amount, ItemId, Quantity};

/// One recorded sale.
///
/// Immutable once built: the fields are private and have no setters, so any
/// reordering of the ledger moves a record's ids, amounts and timestamp as one
/// unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleRecord {
    item_id: ItemId,
    quantity_sold: Quantity,
    total_amount: Amount,
    sold_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(
        item_id: ItemId,
        quantity_sold: Quantity,
        total_amount: Amount,
        sold_at: DateTime<Utc>,
    ) -> Self {
        Self {
            item_id,
            quantity_sold,
            total_amount,
            sold_at,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity_sold(&self) -> Quantity {
        self.quantity_sold
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }
}
