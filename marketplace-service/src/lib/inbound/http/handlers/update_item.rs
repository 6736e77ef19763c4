use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::models::UpdateItemCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItemData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::item::errors::ItemError;

/// HTTP request body for updating an item (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ItemError> {
        Ok(UpdateItemCommand {
            name: ItemName::new(self.name)?,
            description: self.description,
            price: Price::new(self.price)?,
        })
    }
}

/// Update an item. Only its owner may do so.
///
/// Existence and ownership are settled before the body is looked at, so a
/// non-owner gets 403 whatever they send.
pub async fn update_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;

    state
        .item_service
        .get_owned_item(item_id, user.user_id)
        .await?;

    let Json(req) = body?;
    let command = req.try_into_command()?;

    state
        .item_service
        .update_item(item_id, command, user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|item| ApiSuccess::new(StatusCode::OK, ItemData::from(&item)))
}
