//! In-process repositories with the same uniqueness rules as the Postgres schema.
//!
//! Used for local runs without a database and by the HTTP integration tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::NewItem;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::item::errors::ItemError;
use crate::user::errors::UserError;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        // Checked under the write lock, like a unique constraint at insert time
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }

        let id = UserId(users.keys().next_back().map_or(1, |last| last.0 + 1));
        let created = User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: NewItem) -> Result<Item, ItemError> {
        let mut items = self.items.write().await;

        let id = ItemId(items.keys().next_back().map_or(1, |last| last.0 + 1));
        let created = Item {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
            category_id: item.category_id,
            owner_id: item.owner_id,
        };
        items.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Item>, ItemError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Item>, ItemError> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item)
            }
            None => Err(ItemError::NotFound(item.id)),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<(), ItemError> {
        self.items
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(ItemError::NotFound(id))
    }
}
