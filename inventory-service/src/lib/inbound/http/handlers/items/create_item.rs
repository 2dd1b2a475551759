use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::item::errors::AmountError;
use crate::domain::item::errors::ItemNameError;
use crate::domain::item::models::Amount;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateItemRequest>,
) -> Result<ApiSuccess<CreateItemResponseData>, ApiError> {
    state
        .item_service
        .create_item(body.try_into_command()?, current_user.0.id)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for creating an item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateItemRequest {
    name: String,
    description: Option<String>,
    #[serde(default)]
    amount: i32,
    #[serde(default)]
    is_available: bool,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateItemRequestError {
    #[error("Invalid item name: {0}")]
    Name(#[from] ItemNameError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
}

impl CreateItemRequest {
    fn try_into_command(self) -> Result<CreateItemCommand, ParseCreateItemRequestError> {
        let name = ItemName::new(self.name)?;
        let amount = Amount::new(self.amount)?;
        Ok(CreateItemCommand {
            name,
            description: self.description,
            amount,
            is_available: self.is_available,
        })
    }
}

impl From<ParseCreateItemRequestError> for ApiError {
    fn from(err: ParseCreateItemRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateItemResponseData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: i32,
    pub is_available: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<&Item> for CreateItemResponseData {
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
