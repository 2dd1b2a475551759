use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::item::models::Item;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ListItemResponseData>>, ApiError> {
    state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)
        .map(|items| {
            ApiSuccess::new(
                StatusCode::OK,
                items.iter().map(ListItemResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemResponseData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub is_available: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<&Item> for ListItemResponseData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.as_str().to_string(),
            description: item.description.clone(),
            amount: item.amount.value(),
            is_available: item.is_available,
            created_by: item.created_by.to_string(),
            created_at: item.created_at,
            last_updated: item.last_updated,
        }
    }
}
