//! Service layer for file I/O.

pub mod store;

pub use store::StoreService;
