//! Sources of initial stock levels and prices for newly inserted items.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cashreg_core::{Quantity, UnitPrice};

/// Smallest generated stock level.
pub const MIN_QUANTITY: u32 = 1;
/// Largest generated stock level.
pub const MAX_QUANTITY: u32 = 10;
/// Smallest generated unit price.
pub const MIN_PRICE: u32 = 100;
/// Largest generated unit price.
pub const MAX_PRICE: u32 = 999;

/// Supplies quantity and price for each item created by a batch insert.
///
/// Injected so tests can substitute deterministic values.
pub trait StockGenerator: Send {
    fn quantity(&mut self) -> Quantity;
    fn unit_price(&mut self) -> UnitPrice;
}

/// Uniform random stock: quantity in `[1, 10]`, price in `[100, 999]`.
#[derive(Debug, Clone)]
pub struct RandomStock<R> {
    rng: R,
}

impl<R: Rng + Send> RandomStock<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStock<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> StockGenerator for RandomStock<R> {
    fn quantity(&mut self) -> Quantity {
        Quantity::new(self.rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY))
    }

    fn unit_price(&mut self) -> UnitPrice {
        UnitPrice::at_least_one(self.rng.gen_range(MIN_PRICE..=MAX_PRICE))
    }
}

/// Replays a fixed cycle of `(quantity, price)` pairs.
#[derive(Debug, Clone)]
pub struct ScriptedStock {
    script: Vec<(Quantity, UnitPrice)>,
    next_quantity: usize,
    next_price: usize,
}

impl ScriptedStock {
    /// An empty script falls back to `(1, 100)` for every item.
    pub fn new(script: impl IntoIterator<Item = (Quantity, UnitPrice)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next_quantity: 0,
            next_price: 0,
        }
    }

    fn entry(&self, cursor: usize) -> (Quantity, UnitPrice) {
        if self.script.is_empty() {
            return (Quantity::new(MIN_QUANTITY), UnitPrice::at_least_one(MIN_PRICE));
        }
        self.script[cursor % self.script.len()]
    }
}

impl StockGenerator for ScriptedStock {
    fn quantity(&mut self) -> Quantity {
        let (quantity, _) = self.entry(self.next_quantity);
        self.next_quantity += 1;
        quantity
    }

    fn unit_price(&mut self) -> UnitPrice {
        let (_, price) = self.entry(self.next_price);
        self.next_price += 1;
        price
    }
}
