//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// The catalog API returns a two-level tree: root categories with their
/// direct subcategories. Deeper nesting is not produced by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Direct children (empty for leaf categories)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    pub fn with_subcategory(mut self, sub: Category) -> Self {
        self.subcategories.push(sub);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<Category>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tree_deserialize() {
        let json = r#"[
            {"id": "hot", "name": "Горячие блюда", "subcategories": [
                {"id": "soup", "name": "Супы"}
            ]},
            {"id": "bakery", "name": "Выпечка", "subcategories": null},
            {"id": "drinks", "name": "Напитки"}
        ]"#;
        let tree: Vec<Category> = serde_json::from_str(json).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].subcategories.len(), 1);
        assert_eq!(tree[0].subcategories[0].name, "Супы");
        assert!(tree[1].subcategories.is_empty());
        assert!(tree[2].subcategories.is_empty());
    }
}
