use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ReplaceItemCommand;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::user::models::UserId;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Create a new item on behalf of an authenticated user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(
        &self,
        command: CreateItemCommand,
        creator: UserId,
    ) -> Result<Item, ItemError>;

    /// Retrieve item by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Retrieve all existing items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// Completely replace an existing item.
    ///
    /// The item keeps its identity, creator, and creation timestamp; every
    /// other field is overwritten and `last_updated` is refreshed.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn replace_item(
        &self,
        id: &ItemId,
        command: ReplaceItemCommand,
    ) -> Result<Item, ItemError>;

    /// Partially change an existing item.
    ///
    /// Only provided fields are changed; `last_updated` is refreshed.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_item(
        &self,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError>;

    /// Delete existing item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for the item aggregate.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist new item to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Retrieve item by identifier, `None` if not found.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Retrieve all items from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Item>, ItemError>;

    /// Update existing item in storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// Remove item from storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
}
