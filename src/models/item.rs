//! A single tracked belonging.

use crate::error::{StoreError, StoreResult};
use crate::models::Season;
use serde::{Deserialize, Serialize};

/// A tracked belonging.
///
/// Items are immutable once added to a category; changing one means
/// removing it and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// What the item is (e.g., "laptop", "toothbrush")
    pub description: String,
    /// Season tag
    pub season: Season,
    /// Explicit display position requested when the item was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

impl Item {
    /// Creates a new Item with validation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] if the description is blank.
    pub fn new(description: impl Into<String>, season: Season, index: Option<i64>) -> StoreResult<Self> {
        let description = description.into().trim().to_string();
        Self::validate_description(&description)?;

        Ok(Self {
            description,
            season,
            index,
        })
    }

    fn validate_description(description: &str) -> StoreResult<()> {
        if description.is_empty() {
            return Err(StoreError::InvalidName {
                field: "item description",
                reason: "description cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
