//! Error types for store operations.

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the belongings store and its YAML persistence.
///
/// `CategoryNotFound` and `ItemNotFound` are both "not found" conditions;
/// use [`StoreError::is_not_found`] when the distinction does not matter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A category with this name already exists.
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// No category with this name exists.
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    /// The category exists but holds no item with this description.
    #[error("Item '{description}' not found in category '{category}'")]
    ItemNotFound {
        /// Category that was searched
        category: String,
        /// Description that was looked up
        description: String,
    },

    /// Season code outside of s/w/n.
    #[error("Invalid season '{0}'. Expected s (summer), w (winter) or n (neutral)")]
    InvalidSeason(String),

    /// Empty category name or item description.
    #[error("Invalid {field}: {reason}")]
    InvalidName {
        /// Which field was rejected ("category name", "item description")
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Source and target of a move are the same category.
    #[error("Item is already in category '{0}'")]
    SameCategory(String),

    /// Malformed YAML or a document that does not match the store layout.
    #[error("Failed to parse store: {0}")]
    Parse(String),

    /// Serializing the store to YAML failed.
    #[error("Failed to serialize store: {0}")]
    Serialize(String),

    /// Underlying file system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns true for both missing categories and missing items.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_) | Self::ItemNotFound { .. })
    }

    /// Returns true for errors caused by the caller's input or the file's
    /// content rather than by the file system.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialize(_))
    }
}
