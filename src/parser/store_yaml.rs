//! YAML encoding of the belongings store.
//!
//! The document is a top-level mapping of category name to a list of item
//! mappings:
//!
//! ```yaml
//! tech:
//! - description: laptop
//!   season: n
//! clothing:
//! - description: coat
//!   season: w
//!   index: 0
//! ```
//!
//! Mapping order is category order. A category whose value is null is read
//! as an empty category.

use crate::error::{StoreError, StoreResult};
use crate::models::{Category, Item, Store};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for category in self.categories() {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = Store;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping of category names to item lists")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Store, E> {
                Ok(Store::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Store, A::Error> {
                let mut categories: Vec<Category> = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    let items = map.next_value::<Option<Vec<Item>>>()?.unwrap_or_default();

                    let mut category = Category::new(name).map_err(de::Error::custom)?;
                    if categories.iter().any(|c| c.name == category.name) {
                        return Err(de::Error::custom(format!(
                            "duplicate category '{}'",
                            category.name
                        )));
                    }
                    for item in items {
                        let item = Item::new(item.description, item.season, item.index)
                            .map_err(de::Error::custom)?;
                        category.items.push(item);
                    }
                    categories.push(category);
                }
                Store::from_categories(categories).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(StoreVisitor)
    }
}

/// Parses YAML text into a store.
///
/// Blank documents produce an empty store.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] for malformed YAML or a document whose
/// shape does not match the store layout.
pub fn parse_store(content: &str) -> StoreResult<Store> {
    if content.trim().is_empty() {
        return Ok(Store::new());
    }
    serde_yml::from_str(content).map_err(|e| StoreError::Parse(e.to_string()))
}

/// Serializes a store to YAML text.
pub fn serialize_store(store: &Store) -> StoreResult<String> {
    serde_yml::to_string(store).map_err(|e| StoreError::Serialize(e.to_string()))
}
