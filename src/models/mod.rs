//! Data models for the belongings store.
//!
//! Models are independent of file I/O and of the command-line surface.

pub mod category;
pub mod item;
pub mod season;
pub mod store;

pub use category::Category;
pub use item::Item;
pub use season::Season;
pub use store::Store;
