//! In-memory belongings store.

use crate::error::{StoreError, StoreResult};
use crate::models::{Category, Item, Season};
use tracing::debug;

/// Root of the belongings document: an ordered set of uniquely named
/// categories, each holding an ordered list of items.
///
/// Category order is insertion order and survives a save/load round trip.
///
/// # Examples
///
/// ```
/// use belongings::models::{Season, Store};
///
/// let mut store = Store::new();
/// store.add_category("tech")?;
/// store.add_item("tech", "laptop", "n", None)?;
///
/// assert_eq!(store.items("tech").unwrap()[0].season, Season::Neutral);
/// # Ok::<(), belongings::error::StoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    categories: Vec<Category>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-validated categories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCategory`] if two categories share a name.
    pub fn from_categories(categories: Vec<Category>) -> StoreResult<Self> {
        let mut store = Self::new();
        for category in categories {
            if store.contains(&category.name) {
                return Err(StoreError::DuplicateCategory(category.name));
            }
            store.categories.push(category);
        }
        Ok(store)
    }

    /// Categories in store order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.name == name)
    }

    fn category_mut(&mut self, name: &str) -> StoreResult<&mut Category> {
        let name = name.trim();
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| StoreError::CategoryNotFound(name.to_string()))
    }

    /// Items of a category, if it exists.
    pub fn items(&self, name: &str) -> Option<&[Item]> {
        self.category(name).map(|c| c.items.as_slice())
    }

    /// Returns true if a category with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the store has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Adds an empty category at the end of the store.
    pub fn add_category(&mut self, name: &str) -> StoreResult<()> {
        let category = Category::new(name)?;
        if self.contains(&category.name) {
            return Err(StoreError::DuplicateCategory(category.name));
        }

        debug!(category = %category.name, "adding category");
        self.categories.push(category);
        Ok(())
    }

    /// Removes a category together with all of its items.
    pub fn remove_category(&mut self, name: &str) -> StoreResult<Category> {
        let name = name.trim();
        let position = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::CategoryNotFound(name.to_string()))?;

        debug!(category = %name, "removing category");
        Ok(self.categories.remove(position))
    }

    /// Renames a category in place, keeping its items and its position.
    pub fn rename_category(&mut self, old: &str, new: &str) -> StoreResult<()> {
        let new = Category::normalize_name(new)?;
        if !self.contains(old) {
            return Err(StoreError::CategoryNotFound(old.trim().to_string()));
        }
        if new == old.trim() {
            return Ok(());
        }
        if self.contains(&new) {
            return Err(StoreError::DuplicateCategory(new));
        }

        debug!(from = %old.trim(), to = %new, "renaming category");
        self.category_mut(old)?.name = new;
        Ok(())
    }

    /// Adds an item to a category.
    ///
    /// `season` is a season code (`s`, `w`, `n`). With an `index`, the item
    /// is placed at that position (clamped to the category's bounds);
    /// otherwise it is appended. Returns the position the item landed at.
    pub fn add_item(
        &mut self,
        category: &str,
        description: &str,
        season: &str,
        index: Option<i64>,
    ) -> StoreResult<usize> {
        let target = self.category_mut(category)?;
        let season: Season = season.parse()?;
        let item = Item::new(description, season, index)?;

        debug!(category = %target.name, item = %item.description, %season, ?index, "adding item");
        Ok(target.insert(item))
    }

    /// Removes the first item in `category` whose description matches.
    pub fn remove_item(&mut self, category: &str, description: &str) -> StoreResult<Item> {
        let target = self.category_mut(category)?;
        let item = target.remove(description)?;

        debug!(category = %target.name, item = %item.description, "removed item");
        Ok(item)
    }

    /// Moves the first matching item from one category to the end of another.
    ///
    /// Both categories are checked before anything is changed.
    pub fn move_item(&mut self, from: &str, description: &str, to: &str) -> StoreResult<()> {
        if !self.contains(to) {
            return Err(StoreError::CategoryNotFound(to.trim().to_string()));
        }
        if from.trim() == to.trim() {
            return Err(StoreError::SameCategory(to.trim().to_string()));
        }

        let item = self.category_mut(from)?.remove(description)?;
        let target = self.category_mut(to)?;
        debug!(from = %from.trim(), to = %target.name, item = %item.description, "moving item");
        target.items.push(item);
        Ok(())
    }
}
