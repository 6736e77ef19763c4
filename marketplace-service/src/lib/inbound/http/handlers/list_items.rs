use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ItemData;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError> {
    state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)
        .map(|items| ApiSuccess::new(StatusCode::OK, items.iter().map(ItemData::from).collect()))
}

pub async fn list_items_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError> {
    let category_id = category_id
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid category ID: {}", category_id)))?;

    state
        .item_service
        .list_items_by_category(category_id)
        .await
        .map_err(ApiError::from)
        .map(|items| ApiSuccess::new(StatusCode::OK, items.iter().map(ItemData::from).collect()))
}
