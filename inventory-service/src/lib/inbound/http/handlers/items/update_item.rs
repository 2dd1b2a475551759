use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Amount;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::UpdateItemCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for partially updating an item (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<i32>,
    pub is_available: Option<bool>,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ItemError> {
        // Validation happens here - errors are automatically converted via #[from]
        let name = self.name.map(ItemName::new).transpose()?;
        let amount = self.amount.map(Amount::new).transpose()?;

        Ok(UpdateItemCommand {
            name,
            description: self.description,
            amount,
            is_available: self.is_available,
        })
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<ApiSuccess<UpdateItemResponseData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;
    let command = req.try_into_command()?;

    state
        .item_service
        .update_item(&item_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateItemResponseData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub is_available: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<&Item> for UpdateItemResponseData {
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
