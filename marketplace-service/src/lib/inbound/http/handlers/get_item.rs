use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItemData;
use crate::inbound::http::router::AppState;
use crate::item::errors::ItemError;

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;

    state
        .item_service
        .get_item(item_id)
        .await
        .map_err(ApiError::from)
        .map(|item| ApiSuccess::new(StatusCode::OK, ItemData::from(&item)))
}
