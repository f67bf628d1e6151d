//! The item catalog: an ordered, growable collection keyed by [`ItemId`].

use cashreg_core::{DomainError, DomainResult, Entity, ItemId, Quantity};

use crate::item::Item;
use crate::stock::StockGenerator;

/// Slots available before the first growth.
pub const INITIAL_CATALOG_SLOTS: usize = 10;

/// Largest number of items a single batch may add.
pub const MAX_BATCH: u32 = 10_000;

/// Catalog of items in insertion order.
///
/// `capacity` is the number of slots currently reserved; a batch that does not
/// fit in the free slots grows it by exactly the batch size. Removal compacts
/// the remaining items (relative order is preserved) and frees a trailing slot.
///
/// Not safe for concurrent mutation; callers that share a catalog across
/// threads must wrap its owner in a single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    capacity: usize,
    /// Highest id ever assigned; ids are never handed out twice.
    last_assigned: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CATALOG_SLOTS)
    }

    /// Catalog with `capacity` logical slots. Storage is allocated as items
    /// arrive, not up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            last_assigned: 0,
        }
    }

    /// Number of items present.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// True when a batch of `count` would not fit in the free slots.
    pub fn needs_growth(&self, count: usize) -> bool {
        count > self.free_slots()
    }

    /// Insert `count` new items with ids `starting_id + 1 ..= starting_id + count`.
    ///
    /// Quantity and price for each item come from `stock`. Returns the last
    /// assigned id so the caller can keep its running counter.
    pub fn insert_batch(
        &mut self,
        count: u32,
        starting_id: u32,
        stock: &mut dyn StockGenerator,
    ) -> DomainResult<ItemId> {
        if count == 0 {
            return Err(DomainError::validation("batch size must be positive"));
        }
        if count > MAX_BATCH {
            return Err(DomainError::validation(format!(
                "batch size {count} exceeds the limit of {MAX_BATCH}"
            )));
        }
        if starting_id < self.last_assigned {
            return Err(DomainError::invalid_id(format!(
                "ids up to {} are already assigned (starting id {starting_id})",
                self.last_assigned
            )));
        }
        let last = starting_id
            .checked_add(count)
            .ok_or_else(|| DomainError::validation("item id space exhausted"))?;

        let batch = count as usize;
        if self.needs_growth(batch) {
            self.capacity = self
                .capacity
                .checked_add(batch)
                .ok_or_else(|| DomainError::validation("catalog capacity exhausted"))?;
            tracing::debug!(capacity = self.capacity, batch, "catalog grown");
        }

        for raw in starting_id + 1..=last {
            let id = ItemId::new(raw)?;
            let quantity = stock.quantity();
            let unit_price = stock.unit_price();
            self.items.push(Item::new(id, quantity, unit_price));
        }
        self.last_assigned = last;

        ItemId::new(last)
    }

    /// Remove the item with `id`, shifting later items one position down.
    ///
    /// Returns `None` and leaves the catalog unchanged when no such item exists.
    pub fn remove_by_id(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Take `quantity` units out of the stock of `id`; returns what is left.
    ///
    /// Fails with `ItemNotFound` or `InsufficientStock`, leaving the item as it was.
    pub fn withdraw(&mut self, id: ItemId, quantity: Quantity) -> DomainResult<Quantity> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| DomainError::item_not_found(id))?;
        item.withdraw(quantity)?;
        Ok(item.quantity())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Items in storage order. May be called repeatedly.
    pub fn list_non_empty(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
