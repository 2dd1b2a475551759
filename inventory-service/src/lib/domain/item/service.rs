use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ReplaceItemCommand;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for item operations.
///
/// Concrete implementation of ItemServicePort with dependency injection.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    /// Create a new item service with an injected repository.
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }

    async fn get_item_or_not_found(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn create_item(
        &self,
        command: CreateItemCommand,
        creator: UserId,
    ) -> Result<Item, ItemError> {
        let now = Utc::now();

        let item = Item {
            id: ItemId::new(),
            name: command.name,
            description: command.description,
            amount: command.amount,
            is_available: command.is_available,
            created_by: creator,
            created_at: now,
            last_updated: now,
        };

        self.repository.create(item).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.get_item_or_not_found(id).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.repository.list_all().await
    }

    async fn replace_item(
        &self,
        id: &ItemId,
        command: ReplaceItemCommand,
    ) -> Result<Item, ItemError> {
        let mut item = self.get_item_or_not_found(id).await?;

        item.name = command.name;
        item.description = command.description;
        item.amount = command.amount;
        item.is_available = command.is_available;
        item.last_updated = Utc::now();

        self.repository.update(item).await
    }

    async fn update_item(
        &self,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError> {
        let mut item = self.get_item_or_not_found(id).await?;

        if let Some(name) = command.name {
            item.name = name;
        }
        if let Some(description) = command.description {
            item.description = Some(description);
        }
        if let Some(amount) = command.amount {
            item.amount = amount;
        }
        if let Some(is_available) = command.is_available {
            item.is_available = is_available;
        }
        item.last_updated = Utc::now();

        self.repository.update(item).await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError> {
        // Surface NotFound before attempting the delete, as the original
        // endpoints did.
        let item = self.get_item_or_not_found(id).await?;
        self.repository.delete(&item.id).await
    }
}
