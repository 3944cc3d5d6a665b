//! Shared types for the HomeFood storefront
//!
//! Catalog models consumed from the remote API and shared between
//! the catalog presenter and its callers.

pub mod models;

// Re-exports
pub use models::{Category, Dish};
pub use serde::{Deserialize, Serialize};
