//! Parsing and serialization of the store file.

pub mod store_yaml;

pub use store_yaml::{parse_store, serialize_store};
