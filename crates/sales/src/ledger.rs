//! Append-only, capacity-bounded sales history.

use cashreg_core::{Amount, DomainError, DomainResult, ItemId};

use crate::record::SaleRecord;

/// Default maximum number of recorded sales.
pub const MAX_SALES: usize = 1000;

/// Ledger of sale records in storage order.
///
/// The capacity is fixed at construction and never grows; a full ledger
/// rejects further appends instead of overwriting or dropping history.
/// Records are never removed. The only reordering is [`SalesLedger::sort_by_item_id`].
///
/// Not safe for concurrent mutation without external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
    capacity: usize,
}

impl Default for SalesLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SALES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left before appends start failing.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.records.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Append `record` to the first free slot and return that slot's index.
    pub fn append(&mut self, record: SaleRecord) -> DomainResult<usize> {
        if self.is_full() {
            return Err(DomainError::capacity_exceeded(self.capacity));
        }
        let slot = self.records.len();
        self.records.push(record);
        Ok(slot)
    }

    /// Reorder all records by ascending item id.
    ///
    /// Records with equal ids keep their relative order, though callers must
    /// not rely on it.
    pub fn sort_by_item_id(&mut self) {
        self.records.sort_by_key(SaleRecord::item_id);
        tracing::debug!(records = self.records.len(), "sales ledger sorted by item id");
    }

    /// Records in storage order. May be called repeatedly.
    pub fn list_all(&self) -> impl Iterator<Item = &SaleRecord> + '_ {
        self.records.iter()
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Sales recorded against one item, in storage order.
    pub fn sales_for(&self, item_id: ItemId) -> impl Iterator<Item = &SaleRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.item_id() == item_id)
    }

    pub fn total_revenue(&self) -> Amount {
        self.records.iter().map(SaleRecord::total_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashreg_core::Quantity;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn record(item: u32, qty: u32, amount: u64, offset_secs: i64) -> SaleRecord {
        SaleRecord::new(
            ItemId::new(item).unwrap(),
            Quantity::new(qty),
            Amount::new(amount),
            base_time() + Duration::seconds(offset_secs),
        )
    }

    #[test]
    fn append_returns_consecutive_slots() {
        let mut ledger = SalesLedger::new();
        assert_eq!(ledger.append(record(1001, 1, 100, 0)).unwrap(), 0);
        assert_eq!(ledger.append(record(1000, 2, 400, 1)).unwrap(), 1);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.remaining(), MAX_SALES - 2);
    }

    #[test]
    fn full_ledger_rejects_append_without_dropping_history() {
        let mut ledger = SalesLedger::with_capacity(2);
        ledger.append(record(1000, 1, 100, 0)).unwrap();
        ledger.append(record(1001, 1, 100, 1)).unwrap();
        assert!(ledger.is_full());

        let before = ledger.clone();
        let err = ledger.append(record(1002, 1, 100, 2)).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 2 });
        assert_eq!(ledger, before);
    }

    #[test]
    fn zero_capacity_ledger_is_always_full() {
        let mut ledger = SalesLedger::with_capacity(0);
        assert!(ledger.is_full());
        assert!(ledger.append(record(1000, 1, 100, 0)).is_err());
    }

    #[test]
    fn sort_keeps_timestamps_with_their_records() {
        let mut ledger = SalesLedger::new();
        ledger.append(record(1003, 1, 300, 0)).unwrap();
        ledger.append(record(1001, 2, 200, 10)).unwrap();
        ledger.append(record(1002, 3, 900, 20)).unwrap();

        ledger.sort_by_item_id();

        let sorted: Vec<_> = ledger
            .list_all()
            .map(|r| {
                (r.item_id().get(), r.quantity_sold().get(), r.total_amount().get(), r.sold_at())
            })
            .collect();
        assert_eq!(
            sorted,
            vec![
                (1001, 2, 200, base_time() + Duration::seconds(10)),
                (1002, 3, 900, base_time() + Duration::seconds(20)),
                (1003, 1, 300, base_time()),
            ]
        );
    }

    #[test]
    fn sort_on_empty_ledger_is_noop() {
        let mut ledger = SalesLedger::new();
        ledger.sort_by_item_id();
        assert!(ledger.is_empty());
    }

    #[test]
    fn revenue_and_per_item_queries() {
        let mut ledger = SalesLedger::new();
        ledger.append(record(1000, 1, 150, 0)).unwrap();
        ledger.append(record(1001, 2, 400, 1)).unwrap();
        ledger.append(record(1000, 3, 450, 2)).unwrap();

        assert_eq!(ledger.total_revenue(), Amount::new(1000));
        let quantities: Vec<u32> = ledger
            .sales_for(ItemId::new(1000).unwrap())
            .map(|r| r.quantity_sold().get())
            .collect();
        assert_eq!(quantities, vec![1, 3]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after sorting, item ids are non-decreasing and the records are a
        /// permutation of the original ones (no field separated from its timestamp).
        #[test]
        fn sort_is_a_permutation_in_item_order(
            entries in prop::collection::vec(
                (1u32..50, 1u32..10, 100u64..10_000, 0i64..100_000),
                0..60,
            )
        ) {
            let mut ledger = SalesLedger::new();
            for (item, qty, amount, offset) in &entries {
                ledger.append(record(*item, *qty, *amount, *offset)).unwrap();
            }
            let mut before: Vec<SaleRecord> = ledger.records().to_vec();

            ledger.sort_by_item_id();

            let after: Vec<SaleRecord> = ledger.records().to_vec();
            prop_assert!(after.windows(2).all(|w| w[0].item_id() <= w[1].item_id()));

            let mut after_sorted = after.clone();
            let key =
                |r: &SaleRecord| (r.item_id(), r.quantity_sold(), r.total_amount(), r.sold_at());
            before.sort_by_key(key);
            after_sorted.sort_by_key(key);
            prop_assert_eq!(before, after_sorted);
        }
    }
}
