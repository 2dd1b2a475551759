use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::item::errors::AmountError;
use crate::domain::item::errors::ItemNameError;
use crate::domain::item::models::Amount;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::ReplaceItemCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for fully replacing an item; every field is required
/// except the optional description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplaceItemRequest {
    name: String,
    description: Option<String>,
    amount: i32,
    is_available: bool,
}

#[derive(Debug, Clone, Error)]
enum ParseReplaceItemRequestError {
    #[error("Invalid item name: {0}")]
    Name(#[from] ItemNameError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
}

impl ReplaceItemRequest {
    fn try_into_command(self) -> Result<ReplaceItemCommand, ParseReplaceItemRequestError> {
        let name = ItemName::new(self.name)?;
        let amount = Amount::new(self.amount)?;
        Ok(ReplaceItemCommand {
            name,
            description: self.description,
            amount,
            is_available: self.is_available,
        })
    }
}

impl From<ParseReplaceItemRequestError> for ApiError {
    fn from(err: ParseReplaceItemRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReplaceItemRequest>,
) -> Result<ApiSuccess<ReplaceItemResponseData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = req.try_into_command()?;

    state
        .item_service
        .replace_item(&item_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceItemResponseData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub is_available: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<&Item> for ReplaceItemResponseData {
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
