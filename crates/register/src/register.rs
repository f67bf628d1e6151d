use cashreg_core::{Clock, DomainError, DomainResult, ItemId, Quantity, SystemClock};
use cashreg_inventory::{Catalog, Item, RandomStock, StockGenerator};
use cashreg_sales::SalesLedger;

use crate::config::RegisterConfig;
use crate::report::{self, ItemRow, RegisterSummary, SaleRow};
use crate::transaction::{self, Sale};

/// One operator session: catalog, sales ledger and the running id counter.
///
/// All operations take `&mut self` and run to completion; there is no
/// internal locking.
pub struct Register {
    catalog: Catalog,
    ledger: SalesLedger,
    last_item_id: u32,
    clock: Box<dyn Clock>,
    stock: Box<dyn StockGenerator>,
}

impl core::fmt::Debug for Register {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Register")
            .field("catalog", &self.catalog)
            .field("ledger", &self.ledger)
            .field("last_item_id", &self.last_item_id)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Register`] with custom clock and stock sources.
pub struct RegisterBuilder {
    config: RegisterConfig,
    clock: Option<Box<dyn Clock>>,
    stock: Option<Box<dyn StockGenerator>>,
}

impl RegisterBuilder {
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn stock(mut self, stock: impl StockGenerator + 'static) -> Self {
        self.stock = Some(Box::new(stock));
        self
    }

    pub fn build(self) -> Register {
        let seed = self.config.seed;
        let stock = self.stock.unwrap_or_else(|| match seed {
            Some(seed) => Box::new(RandomStock::seeded(seed)),
            None => Box::new(RandomStock::from_entropy()),
        });
        Register {
            catalog: Catalog::with_capacity(self.config.initial_catalog_slots),
            ledger: SalesLedger::with_capacity(self.config.max_sales),
            last_item_id: self.config.first_item_id,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            stock,
        }
    }
}

impl Register {
    /// Session with the wall clock and random stock (seeded if configured).
    pub fn new(config: RegisterConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: RegisterConfig) -> RegisterBuilder {
        RegisterBuilder {
            config,
            clock: None,
            stock: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    pub fn last_item_id(&self) -> u32 {
        self.last_item_id
    }

    /// Add `count` items with fresh ids and generated stock; returns the last id.
    pub fn insert_items(&mut self, count: u32) -> DomainResult<ItemId> {
        let last = self
            .catalog
            .insert_batch(count, self.last_item_id, &mut *self.stock)?;
        let first = self.last_item_id + 1;
        self.last_item_id = last.get();
        tracing::info!(
            count,
            first_id = first,
            last_id = last.get(),
            capacity = self.catalog.capacity(),
            "items added"
        );
        Ok(last)
    }

    pub fn remove_item(&mut self, id: ItemId) -> DomainResult<Item> {
        match self.catalog.remove_by_id(id) {
            Some(item) => {
                let remaining_items = self.catalog.len();
                tracing::info!(item_id = %id, remaining_items, "item removed");
                Ok(item)
            }
            None => {
                tracing::warn!(item_id = %id, "remove rejected: item not found");
                Err(DomainError::item_not_found(id))
            }
        }
    }

    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.find_by_id(id)
    }

    /// Sell `quantity` units of `id`, timestamped by the session clock.
    pub fn sell(&mut self, id: ItemId, quantity: Quantity) -> DomainResult<Sale> {
        let sold_at = self.clock.now();
        match transaction::sell(&mut self.catalog, &mut self.ledger, id, quantity, sold_at) {
            Ok(sale) => {
                tracing::info!(
                    item_id = %sale.record.item_id(),
                    quantity = %quantity,
                    total = %sale.record.total_amount(),
                    slot = sale.slot,
                    remaining = %sale.remaining,
                    "item sold"
                );
                Ok(sale)
            }
            Err(err) => {
                tracing::warn!(item_id = %id, quantity = %quantity, error = %err, "sale rejected");
                Err(err)
            }
        }
    }

    pub fn items(&self) -> Vec<ItemRow> {
        report::item_rows(&self.catalog)
    }

    pub fn sales(&self) -> Vec<SaleRow> {
        report::sales_rows(&self.ledger)
    }

    /// Sorts the ledger in place by item id, then lists it.
    pub fn sorted_sales(&mut self) -> Vec<SaleRow> {
        report::sorted_sales_rows(&mut self.ledger)
    }

    pub fn summary(&self) -> RegisterSummary {
        report::summary(&self.catalog, &self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashreg_core::{Amount, FixedClock, UnitPrice};
    use cashreg_inventory::ScriptedStock;
    use chrono::{DateTime, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn register_with(config: RegisterConfig) -> Register {
        Register::builder(config)
            .clock(FixedClock(now()))
            .stock(ScriptedStock::new([
                (Quantity::new(5), UnitPrice::new(300).unwrap()),
                (Quantity::new(7), UnitPrice::new(120).unwrap()),
            ]))
            .build()
    }

    fn register() -> Register {
        register_with(RegisterConfig::default())
    }

    #[test]
    fn insert_then_sell_scenario() {
        let mut register = register();
        let last = register.insert_items(2).unwrap();
        assert_eq!(last, id(1001));
        assert_eq!(register.last_item_id(), 1001);

        let sale = register.sell(id(1000), Quantity::new(3)).unwrap();
        assert_eq!(sale.remaining, Quantity::new(2));
        assert_eq!(register.find_item(id(1000)).unwrap().quantity(), Quantity::new(2));

        let sales = register.sales();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].quantity_sold, Quantity::new(3));
        assert_eq!(sales[0].total_amount, Amount::new(900));
        assert_eq!(sales[0].sold_at, now());
    }

    #[test]
    fn id_counter_advances_across_batches() {
        let mut register = register();
        register.insert_items(2).unwrap();
        register.remove_item(id(1001)).unwrap();
        let last = register.insert_items(3).unwrap();

        assert_eq!(last, id(1004));
        let ids: Vec<u32> = register.items().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1000, 1002, 1003, 1004]);
    }

    #[test]
    fn failed_insert_leaves_counter_untouched() {
        let mut register = register();
        assert!(register.insert_items(0).is_err());
        assert_eq!(register.last_item_id(), 999);
        assert!(register.items().is_empty());
    }

    #[test]
    fn removing_unknown_item_is_not_found() {
        let mut register = register();
        register.insert_items(1).unwrap();
        let err = register.remove_item(id(4242)).unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound(id(4242)));
        assert_eq!(register.items().len(), 1);
    }

    #[test]
    fn sell_on_empty_catalog_is_not_found() {
        let mut register = register();
        let err = register.sell(id(9999), Quantity::new(1)).unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound(id(9999)));
        assert!(register.sales().is_empty());
    }

    #[test]
    fn full_ledger_keeps_stock_intact() {
        let mut register = register_with(RegisterConfig {
            max_sales: 3,
            ..RegisterConfig::default()
        });
        register.insert_items(2).unwrap();
        for _ in 0..3 {
            register.sell(id(1001), Quantity::new(1)).unwrap();
        }

        let err = register.sell(id(1000), Quantity::new(2)).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 3 });
        assert_eq!(register.find_item(id(1000)).unwrap().quantity(), Quantity::new(5));
        assert_eq!(register.sales().len(), 3);
        assert_eq!(register.summary().ledger_remaining, 0);
    }

    #[test]
    fn sorted_sales_persist_new_order() {
        let mut register = register();
        register.insert_items(2).unwrap();
        register.sell(id(1001), Quantity::new(1)).unwrap();
        register.sell(id(1000), Quantity::new(1)).unwrap();

        let sorted: Vec<u32> = register.sorted_sales().iter().map(|r| r.item_id.get()).collect();
        assert_eq!(sorted, vec![1000, 1001]);
        let after: Vec<u32> = register.sales().iter().map(|r| r.item_id.get()).collect();
        assert_eq!(after, sorted);
    }

    #[test]
    fn custom_config_sizes_the_stores() {
        let register = register_with(RegisterConfig {
            initial_catalog_slots: 3,
            max_sales: 5,
            first_item_id: 0,
            seed: None,
        });
        assert_eq!(register.catalog().capacity(), 3);
        assert_eq!(register.ledger().capacity(), 5);
        assert_eq!(register.last_item_id(), 0);
    }

    #[test]
    fn largest_slot_reservation_builds_without_allocating() {
        let mut register = register_with(RegisterConfig {
            initial_catalog_slots: crate::config::MAX_CATALOG_SLOTS,
            ..RegisterConfig::default()
        });
        register.insert_items(2).unwrap();
        assert_eq!(register.catalog().capacity(), crate::config::MAX_CATALOG_SLOTS);
        assert_eq!(register.items().len(), 2);
    }

    #[test]
    fn oversized_batch_leaves_session_untouched() {
        let mut register = register();
        let err = register.insert_items(4_000_000_000).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(register.last_item_id(), 999);
        assert!(register.items().is_empty());
    }

    #[test]
    fn seeded_sessions_generate_identical_stock() {
        let config = RegisterConfig {
            seed: Some(11),
            ..RegisterConfig::default()
        };
        let mut a = Register::new(config.clone());
        let mut b = Register::new(config);
        a.insert_items(5).unwrap();
        b.insert_items(5).unwrap();
        assert_eq!(a.items(), b.items());
    }
}
