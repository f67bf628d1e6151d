//! Value objects: equality by value, not identity.
//!
//! Quantities, prices and amounts have **no identity**; two values with the same
//! number are interchangeable. They are small `Copy` types so arithmetic on stock
//! and money stays explicit at the type level.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (`Quantity::checked_sub` returns a fresh value).
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}

/// Number of units (stock on hand, or units sold).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `None` when `other` exceeds `self` (stock cannot go negative).
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}

/// Price of one unit, in the smallest currency unit. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UnitPrice(NonZeroU32);

impl UnitPrice {
    pub fn new(price: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(price)
            .map(Self)
            .ok_or_else(|| DomainError::validation("unit price must be positive"))
    }

    /// Build from a value known to be positive; 0 is lifted to 1.
    pub fn at_least_one(price: u32) -> Self {
        Self(NonZeroU32::new(price).unwrap_or(NonZeroU32::MIN))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Total for `quantity` units. Both factors are `u32`, so the product fits in `u64`.
    pub fn times(self, quantity: Quantity) -> Amount {
        Amount(u64::from(self.get()) * u64::from(quantity.get()))
    }
}

impl core::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for UnitPrice {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitPrice> for u32 {
    fn from(value: UnitPrice) -> Self {
        value.get()
    }
}

impl ValueObject for UnitPrice {}

/// Monetary amount in the smallest currency unit.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl ValueObject for Amount {}
