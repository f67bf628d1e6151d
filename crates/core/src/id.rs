//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU32;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog item.
///
/// Backed by `NonZeroU32`: id 0 is reserved and can never name a real item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemId(NonZeroU32);

impl ItemId {
    /// Create an identifier, rejecting the reserved value 0.
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id("ItemId: 0 is reserved"))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for ItemId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u32 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u32::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(ItemId::new(0), Err(DomainError::InvalidId(_))));
        assert!(matches!("0".parse::<ItemId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parses_and_displays() {
        let id: ItemId = " 1000 ".parse().unwrap();
        assert_eq!(id.get(), 1000);
        assert_eq!(id.to_string(), "1000");
        assert!("abc".parse::<ItemId>().is_err());
    }

    #[test]
    fn converts_to_and_from_u32() {
        let id = ItemId::try_from(42).unwrap();
        assert_eq!(u32::from(id), 42);
        assert!(ItemId::try_from(0).is_err());
    }
}
