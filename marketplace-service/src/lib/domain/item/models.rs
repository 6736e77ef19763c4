use std::fmt;

use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;
use crate::item::errors::ItemIdError;
use crate::item::errors::ItemNameError;
use crate::item::errors::PriceError;

/// Item listed on the marketplace, owned by the user who created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: String,
    pub price: Price,
    pub category_id: i64,
    pub owner_id: UserId,
}

impl Owned for Item {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Parse an item ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(ItemId(id)),
            _ => Err(ItemIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: String) -> Result<Self, ItemNameError> {
        if name.trim().is_empty() {
            return Err(ItemNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(price: f64) -> Result<Self, PriceError> {
        if !price.is_finite() || price < 0.0 {
            return Err(PriceError::Invalid(price));
        }
        Ok(Self(price))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Item record handed to storage; the id is assigned there.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: ItemName,
    pub description: String,
    pub price: Price,
    pub category_id: i64,
    pub owner_id: UserId,
}

/// Command to create an item. The owner comes from the authenticated caller.
#[derive(Debug)]
pub struct CreateItemCommand {
    pub name: ItemName,
    pub description: String,
    pub price: Price,
    pub category_id: i64,
}

/// Command to update the editable fields of an item.
#[derive(Debug)]
pub struct UpdateItemCommand {
    pub name: ItemName,
    pub description: String,
    pub price: Price,
}
