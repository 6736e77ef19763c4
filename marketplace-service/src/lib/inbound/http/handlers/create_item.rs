use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItemData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::item::errors::ItemError;

/// HTTP request body for creating an item (raw JSON)
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: i64,
}

impl CreateItemRequest {
    fn try_into_command(self) -> Result<CreateItemCommand, ItemError> {
        Ok(CreateItemCommand {
            name: ItemName::new(self.name)?,
            description: self.description,
            price: Price::new(self.price)?,
            category_id: self.category_id,
        })
    }
}

/// Create an item owned by the authenticated caller.
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let Json(req) = body?;
    let command = req.try_into_command()?;

    state
        .item_service
        .create_item(command, user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|item| ApiSuccess::new(StatusCode::CREATED, ItemData::from(&item)))
}
