use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::NewItem;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::ownership;
use crate::domain::user::models::UserId;
use crate::item::errors::ItemError;
use crate::item::ports::ItemRepository;
use crate::item::ports::ItemServicePort;

/// Domain service implementation for item operations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        let items = self.repository.list_all().await?;
        if items.is_empty() {
            return Err(ItemError::NoItems);
        }
        Ok(items)
    }

    async fn list_items_by_category(&self, category_id: i64) -> Result<Vec<Item>, ItemError> {
        let items = self.repository.list_by_category(category_id).await?;
        if items.is_empty() {
            return Err(ItemError::NoItemsInCategory(category_id));
        }
        Ok(items)
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    async fn get_owned_item(&self, id: ItemId, caller: UserId) -> Result<Item, ItemError> {
        let item = self.get_item(id).await?;

        ownership::assert_owns(&item, caller).map_err(|e| {
            tracing::warn!(item_id = %id, owner = %item.owner_id, caller = %caller, "Ownership check failed");
            e
        })?;

        Ok(item)
    }

    async fn create_item(
        &self,
        command: CreateItemCommand,
        owner: UserId,
    ) -> Result<Item, ItemError> {
        let item = self
            .repository
            .create(NewItem {
                name: command.name,
                description: command.description,
                price: command.price,
                category_id: command.category_id,
                owner_id: owner,
            })
            .await?;

        tracing::info!(item_id = %item.id, owner = %owner, "Item created");

        Ok(item)
    }

    async fn update_item(
        &self,
        id: ItemId,
        command: UpdateItemCommand,
        caller: UserId,
    ) -> Result<Item, ItemError> {
        let mut item = self.get_owned_item(id, caller).await?;

        item.name = command.name;
        item.description = command.description;
        item.price = command.price;

        self.repository.update(item).await
    }

    async fn delete_item(&self, id: ItemId, caller: UserId) -> Result<(), ItemError> {
        self.get_owned_item(id, caller).await?;
        self.repository.delete(id).await?;

        tracing::info!(item_id = %id, "Item deleted");

        Ok(())
    }
}
