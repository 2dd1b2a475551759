use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::AmountError;
use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemNameError;
use crate::domain::user::models::UserId;

/// Item aggregate entity.
///
/// A stockable good owned by the user who created it.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: Option<String>,
    pub amount: Amount,
    pub is_available: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item name value type
///
/// Non-empty, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid item name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 128 characters
    pub fn new(name: String) -> Result<Self, ItemNameError> {
        if name.trim().is_empty() {
            return Err(ItemNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Get item name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stock amount value type, bounded to 0..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i32);

impl Amount {
    const MIN: i32 = 0;
    const MAX: i32 = 9999;

    /// Create a new bounded amount.
    ///
    /// # Errors
    /// * `OutOfRange` - Value outside 0..=9999
    pub fn new(value: i32) -> Result<Self, AmountError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AmountError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the raw value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self(0)
    }
}

/// Command to create a new item with domain types
#[derive(Debug)]
pub struct CreateItemCommand {
    pub name: ItemName,
    pub description: Option<String>,
    pub amount: Amount,
    pub is_available: bool,
}

/// Command to completely replace an existing item.
///
/// Every field is required; the item keeps only its identity, creator, and
/// creation timestamp.
#[derive(Debug)]
pub struct ReplaceItemCommand {
    pub name: ItemName,
    pub description: Option<String>,
    pub amount: Amount,
    pub is_available: bool,
}

/// Command to partially change an existing item.
///
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateItemCommand {
    pub name: Option<ItemName>,
    pub description: Option<String>,
    pub amount: Option<Amount>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_validation() {
        assert!(ItemName::new("Widget".to_string()).is_ok());

        assert!(matches!(
            ItemName::new("".to_string()),
            Err(ItemNameError::Empty)
        ));
        assert!(matches!(
            ItemName::new("   ".to_string()),
            Err(ItemNameError::Empty)
        ));
        assert!(matches!(
            ItemName::new("x".repeat(129)),
            Err(ItemNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_amount_bounds() {
        assert!(Amount::new(0).is_ok());
        assert!(Amount::new(9999).is_ok());

        assert!(matches!(
            Amount::new(-1),
            Err(AmountError::OutOfRange { .. })
        ));
        assert!(matches!(
            Amount::new(10_000),
            Err(AmountError::OutOfRange { .. })
        ));
    }
}
