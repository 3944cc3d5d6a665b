//! # catalog-presenter
//!
//! Presents a home-food producer's dishes on the storefront page:
//! - highlights strip of producer-recommended dishes
//! - sections grouped by main category and subcategory
//! - editorial section order driven by a [`PriorityTable`]
//! - per-section "show more" and a dish detail overlay
//!
//! Fetching dishes and categories from the catalog API is the caller's
//! job; everything here is synchronous and in-memory.
//!
//! ## Example
//!
//! ```
//! use catalog_presenter::ProducerCatalog;
//! use shared::{Category, Dish};
//!
//! let dishes = vec![
//!     Dish::new("1", "Борщ").in_category("hot"),
//!     Dish::new("2", "Круассан").in_category("bakery"),
//! ];
//! let categories = vec![
//!     Category::new("hot", "Горячие блюда"),
//!     Category::new("bakery", "Выпечка"),
//! ];
//!
//! let catalog = ProducerCatalog::default();
//! let view = catalog.render(&dishes, Some(categories.as_slice()));
//!
//! assert_eq!(view.sections[0].main_name, "Выпечка");
//! ```

pub mod catalog;
pub mod core;
pub mod error;
pub mod snapshot;
pub mod utils;

// Re-exports
pub use catalog::{
    BucketKey, CatalogView, DishOverlay, PriorityTable, ProducerCatalog, Projection, Revealer,
    SectionView, project,
};
pub use crate::core::Config;
pub use error::{CatalogError, CatalogResult};
