use async_trait::async_trait;

use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::NewItem;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::user::models::UserId;
use crate::item::errors::ItemError;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `NoItems` - Nothing is listed
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// # Errors
    /// * `NoItemsInCategory` - Category has no items
    /// * `DatabaseError` - Database operation failed
    async fn list_items_by_category(&self, category_id: i64) -> Result<Vec<Item>, ItemError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: ItemId) -> Result<Item, ItemError>;

    /// Load an item `caller` may mutate.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Caller does not own the item
    /// * `DatabaseError` - Database operation failed
    async fn get_owned_item(&self, id: ItemId, caller: UserId) -> Result<Item, ItemError>;

    /// Create an item owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, command: CreateItemCommand, owner: UserId)
        -> Result<Item, ItemError>;

    /// Update an item on behalf of `caller`.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Caller does not own the item
    /// * `DatabaseError` - Database operation failed
    async fn update_item(
        &self,
        id: ItemId,
        command: UpdateItemCommand,
        caller: UserId,
    ) -> Result<Item, ItemError>;

    /// Delete an item on behalf of `caller`.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Forbidden` - Caller does not own the item
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: ItemId, caller: UserId) -> Result<(), ItemError>;
}

/// Persistence operations for items.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    async fn create(&self, item: NewItem) -> Result<Item, ItemError>;

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemError>;

    async fn list_all(&self) -> Result<Vec<Item>, ItemError>;

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Item>, ItemError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    async fn delete(&self, id: ItemId) -> Result<(), ItemError>;
}
