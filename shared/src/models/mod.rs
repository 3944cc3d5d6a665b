//! Data models
//!
//! Catalog records as returned by the storefront API. The presenter
//! treats them as immutable snapshots for one render pass.

pub mod category;
pub mod dish;

// Re-exports
pub use category::*;
pub use dish::*;
