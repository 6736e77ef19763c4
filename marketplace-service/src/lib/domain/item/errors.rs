use thiserror::Error;

use crate::domain::ownership::OwnershipError;
use crate::item::models::ItemId;

/// Error type for ItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("Invalid item ID: {0}")]
    InvalidFormat(String),
}

/// Error type for ItemName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemNameError {
    #[error("Item name is empty")]
    Empty,
}

/// Error type for Price validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a non-negative number, got {0}")]
    Invalid(f64),
}

/// Top-level error type for all item-related operations
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error(transparent)]
    InvalidItemId(#[from] ItemIdError),

    #[error(transparent)]
    InvalidName(#[from] ItemNameError),

    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("No items found")]
    NoItems,

    #[error("No items found for category with ID {0}")]
    NoItemsInCategory(i64),

    #[error(transparent)]
    Forbidden(#[from] OwnershipError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
