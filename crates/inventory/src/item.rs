use serde::{Deserialize, Serialize};

use cashreg_core::{DomainError, DomainResult, Entity, ItemId, Quantity, UnitPrice};

/// A stock-keeping unit in the catalog.
///
/// Only `quantity` changes over an item's lifetime; id and price are fixed at
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    quantity: Quantity,
    unit_price: UnitPrice,
}

impl Item {
    pub fn new(id: ItemId, quantity: Quantity, unit_price: UnitPrice) -> Self {
        Self {
            id,
            quantity,
            unit_price,
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    /// Take `quantity` units out of stock.
    ///
    /// Rejected wholesale when stock is short; the item is left untouched.
    pub(crate) fn withdraw(&mut self, quantity: Quantity) -> DomainResult<()> {
        let remaining = self
            .quantity
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::insufficient_stock(self.id, quantity, self.quantity))?;
        self.quantity = remaining;
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
