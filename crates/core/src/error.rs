//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;
use crate::value_object::Quantity;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the caller decides how to surface it (message,
/// retry prompt). Nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a zero batch size).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (zero, or already assigned).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No catalog item carries the requested id.
    #[error("could not find item {0}")]
    ItemNotFound(ItemId),

    /// A sale asked for more units than the item has in stock.
    #[error("failed to sell {requested} of item {item_id}: only {available} available")]
    InsufficientStock {
        item_id: ItemId,
        requested: Quantity,
        available: Quantity,
    },

    /// The sales ledger has no free slot left.
    #[error("sales ledger is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::ItemNotFound(id)
    }

    pub fn insufficient_stock(item_id: ItemId, requested: Quantity, available: Quantity) -> Self {
        Self::InsufficientStock {
            item_id,
            requested,
            available,
        }
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Stable machine-readable code, used by the JSON output of the driver.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::ItemNotFound(_) => "item_not_found",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}
