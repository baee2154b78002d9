//! Personal Belongings Library
//!
//! This library provides the belongings store (categories of items with a
//! season tag and optional display index), its YAML persistence, and the
//! command handlers used by the `pb` binary.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;
