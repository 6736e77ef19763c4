use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::item::errors::ItemError;

/// Delete an item. Only its owner may do so.
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;

    state
        .item_service
        .delete_item(item_id, user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData {
                    message: "Item deleted successfully".to_string(),
                },
            )
        })
}
