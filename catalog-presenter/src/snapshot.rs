//! Catalog snapshots saved from the storefront API

use std::path::Path;

use serde::de::DeserializeOwned;
use shared::models::{Category, Dish};

use crate::error::CatalogResult;

fn read_json<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Producer dish list (`GET /dishes?producer=...` response body)
pub fn load_dishes(path: impl AsRef<Path>) -> CatalogResult<Vec<Dish>> {
    read_json(path.as_ref())
}

/// Category tree (`GET /categories` response body)
pub fn load_categories(path: impl AsRef<Path>) -> CatalogResult<Vec<Category>> {
    read_json(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::Write;

    #[test]
    fn test_load_dishes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "name": "Борщ", "category": "hot", "is_top": false}}]"#
        )
        .unwrap();

        let dishes = load_dishes(file.path()).unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].name, "Борщ");
    }

    #[test]
    fn test_load_categories_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "hot"}}"#).unwrap();

        assert!(matches!(
            load_categories(file.path()),
            Err(CatalogError::Json(_))
        ));
    }
}
