use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::NewItem;
use crate::domain::item::models::Price;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::UserId;
use crate::item::errors::ItemError;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn item_from_row(row: PgRow) -> Result<Item, ItemError> {
        let database_error = |e: sqlx::Error| ItemError::DatabaseError(e.to_string());

        Ok(Item {
            id: ItemId(row.try_get("id").map_err(database_error)?),
            name: ItemName::new(row.try_get("name").map_err(database_error)?)?,
            description: row.try_get("description").map_err(database_error)?,
            price: Price::new(row.try_get("price").map_err(database_error)?)?,
            category_id: row.try_get("category_id").map_err(database_error)?,
            owner_id: UserId(row.try_get("user_id").map_err(database_error)?),
        })
    }

    fn items_from_rows(rows: Vec<PgRow>) -> Result<Vec<Item>, ItemError> {
        rows.into_iter().map(Self::item_from_row).collect()
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: NewItem) -> Result<Item, ItemError> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, description, price, category_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category_id, user_id
            "#,
        )
        .bind(item.name.as_str())
        .bind(&item.description)
        .bind(item.price.value())
        .bind(item.category_id)
        .bind(item.owner_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Self::item_from_row(row)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemError> {
        sqlx::query(
            r#"
            SELECT id, name, description, price, category_id, user_id
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?
        .map(Self::item_from_row)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, category_id, user_id
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Self::items_from_rows(rows)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, category_id, user_id
            FROM items
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Self::items_from_rows(rows)
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, description = $3, price = $4
            WHERE id = $1
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(&item.description)
        .bind(item.price.value())
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id));
        }

        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<(), ItemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }

        Ok(())
    }
}
