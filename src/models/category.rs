//! Named grouping of items.

use crate::error::{StoreError, StoreResult};
use crate::models::Item;

/// A named, ordered list of items.
///
/// # Validation
///
/// - Name must be unique within a Store (enforced by the store)
/// - Name is trimmed and must be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display name and unique key (e.g., "tech", "clothing")
    pub name: String,
    /// Items in display order
    pub items: Vec<Item>,
}

impl Category {
    /// Creates an empty category with a validated name.
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = Self::normalize_name(name)?;
        Ok(Self {
            name,
            items: Vec::new(),
        })
    }

    /// Trims a category name and rejects blank names.
    pub fn normalize_name(name: impl Into<String>) -> StoreResult<String> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(StoreError::InvalidName {
                field: "category name",
                reason: "name cannot be empty".to_string(),
            });
        }
        Ok(name)
    }

    /// Inserts an item, honoring its explicit index if it has one.
    ///
    /// The index is clamped to `0..=len`. When earlier items were added with
    /// the same index and sit at that position, the new item goes after them.
    pub fn insert(&mut self, item: Item) -> usize {
        let position = match item.index {
            None => self.items.len(),
            Some(requested) => {
                let mut position = usize::try_from(requested.max(0))
                    .unwrap_or(usize::MAX)
                    .min(self.items.len());
                while position < self.items.len() && self.items[position].index == item.index {
                    position += 1;
                }
                position
            }
        };
        self.items.insert(position, item);
        position
    }

    /// Position of the first item with this description.
    pub fn position_of(&self, description: &str) -> Option<usize> {
        let description = description.trim();
        self.items.iter().position(|i| i.description == description)
    }

    /// Removes and returns the first item with this description.
    pub fn remove(&mut self, description: &str) -> StoreResult<Item> {
        let position = self
            .position_of(description)
            .ok_or_else(|| StoreError::ItemNotFound {
                category: self.name.clone(),
                description: description.trim().to_string(),
            })?;
        Ok(self.items.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn item(description: &str, index: Option<i64>) -> Item {
        Item::new(description, Season::Neutral, index).unwrap()
    }

    fn descriptions(category: &Category) -> Vec<&str> {
        category.items.iter().map(|i| i.description.as_str()).collect()
    }

    #[test]
    fn test_new_valid() {
        let category = Category::new(" tech ").unwrap();
        assert_eq!(category.name, "tech");
        assert!(category.items.is_empty());
    }

    #[test]
    fn test_new_invalid() {
        assert!(Category::new("").is_err());
        assert!(Category::new("  \t").is_err());
    }

    #[test]
    fn test_insert_appends_without_index() {
        let mut category = Category::new("tech").unwrap();
        category.insert(item("laptop", None));
        category.insert(item("phone", None));
        assert_eq!(descriptions(&category), ["laptop", "phone"]);
    }

    #[test]
    fn test_insert_at_index() {
        let mut category = Category::new("tech").unwrap();
        category.insert(item("laptop", None));
        category.insert(item("phone", None));
        assert_eq!(category.insert(item("charger", Some(1))), 1);
        assert_eq!(descriptions(&category), ["laptop", "charger", "phone"]);
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut category = Category::new("tech").unwrap();
        category.insert(item("laptop", None));
        assert_eq!(category.insert(item("first", Some(-5))), 0);
        assert_eq!(category.insert(item("last", Some(99))), 2);
        assert_eq!(descriptions(&category), ["first", "laptop", "last"]);
    }

    #[test]
    fn test_insert_same_index_keeps_insertion_order() {
        let mut category = Category::new("tech").unwrap();
        category.insert(item("a", None));
        category.insert(item("b", None));
        category.insert(item("x", Some(1)));
        category.insert(item("y", Some(1)));
        category.insert(item("z", Some(1)));
        assert_eq!(descriptions(&category), ["a", "x", "y", "z", "b"]);
    }

    #[test]
    fn test_remove_first_match() {
        let mut category = Category::new("tech").unwrap();
        category.insert(Item::new("cable", Season::Summer, None).unwrap());
        category.insert(Item::new("cable", Season::Winter, None).unwrap());

        let removed = category.remove("cable").unwrap();
        assert_eq!(removed.season, Season::Summer);
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].season, Season::Winter);
    }

    #[test]
    fn test_remove_missing() {
        let mut category = Category::new("tech").unwrap();
        let err = category.remove("laptop").unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound { .. }));
    }
}
