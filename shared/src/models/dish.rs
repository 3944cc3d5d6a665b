//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity as served by the remote catalog API
///
/// Read-only snapshot: the storefront never mutates dishes, it only
/// groups and orders them for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Category reference (root or subcategory id), `None` when unassigned
    #[serde(default)]
    pub category: Option<String>,
    /// Recommended by the producer, shown in the highlights strip
    #[serde(default)]
    pub is_top: bool,
    /// Price in kopecks
    #[serde(default)]
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Portion weight in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Dish {
    /// Minimal dish, mostly useful for fixtures
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            is_top: false,
            price: 0,
            description: None,
            image: None,
            weight: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn top(mut self) -> Self {
        self.is_top = true;
        self
    }

    /// Category reference with blank ids treated as absent
    pub fn category_ref(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
