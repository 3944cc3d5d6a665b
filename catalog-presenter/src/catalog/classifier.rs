//! Classifier - partitions dishes into (main category, subcategory) buckets
//!
//! Dishes are grouped against the category tree supplied by the caller.
//! Missing trees and dangling category ids never fail: such dishes fall
//! into the uncategorized bucket.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use shared::models::{Category, Dish};

/// Bucket key used when a dish has no resolvable category
pub const UNCATEGORIZED_KEY: &str = "uncategorized";
/// Subcategory half of the key when the dish sits directly in a root
pub const NO_SUBCATEGORY_KEY: &str = "none";
/// Display name of the uncategorized bucket
pub const UNCATEGORIZED_NAME: &str = "Без категории";
/// Subcategory display name for dishes assigned to a root category
pub const NO_SUBCATEGORY_NAME: &str = "Без подкатегории";

/// Identity of a bucket, stable across renders for the same inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn composite(main: Option<&str>, sub: Option<&str>) -> Self {
        Self(format!(
            "{}__{}",
            main.unwrap_or(UNCATEGORIZED_KEY),
            sub.unwrap_or(NO_SUBCATEGORY_KEY)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BucketKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Where a dish's category reference points inside the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryRef<'a> {
    /// The reference names a root category
    Root(&'a Category),
    /// The reference names a subcategory of `root`
    Sub { root: &'a Category, sub: &'a Category },
    /// Absent, blank, or not present in the tree
    Unresolved,
}

/// Id lookup over a two-level category tree
#[derive(Debug, Default)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<&'a str, CategoryRef<'a>>,
}

impl<'a> CategoryIndex<'a> {
    pub fn build(tree: &'a [Category]) -> Self {
        let mut by_id = HashMap::new();

        for root in tree {
            if by_id.insert(root.id.as_str(), CategoryRef::Root(root)).is_some() {
                tracing::warn!("Duplicate category id in tree: {}", root.id);
            }
            for sub in &root.subcategories {
                let entry = CategoryRef::Sub { root, sub };
                if by_id.insert(sub.id.as_str(), entry).is_some() {
                    tracing::warn!("Duplicate category id in tree: {}", sub.id);
                }
            }
        }

        Self { by_id }
    }

    pub fn resolve(&self, id: Option<&str>) -> CategoryRef<'a> {
        id.and_then(|id| self.by_id.get(id).copied())
            .unwrap_or(CategoryRef::Unresolved)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// A derived group of dishes sharing main category and subcategory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<'a> {
    pub key: BucketKey,
    pub main_name: String,
    /// Empty when there is no tree or no main category
    pub sub_name: String,
    pub dishes: Vec<&'a Dish>,
}

impl Bucket<'_> {
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

struct Placement {
    key: BucketKey,
    main_name: String,
    sub_name: String,
}

/// Partition dishes into buckets
///
/// Buckets come back in order of first appearance; dishes keep their
/// input order. Ordering for display is the ranker's job. An empty tree
/// is treated the same as a missing one.
pub fn classify<'a, I>(dishes: I, categories: Option<&[Category]>) -> Vec<Bucket<'a>>
where
    I: IntoIterator<Item = &'a Dish>,
{
    let index = categories
        .filter(|tree| !tree.is_empty())
        .map(CategoryIndex::build);

    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut positions: HashMap<BucketKey, usize> = HashMap::new();

    for dish in dishes {
        let placement = match &index {
            Some(index) => place_in_tree(index.resolve(dish.category_ref())),
            None => place_without_tree(dish),
        };

        match positions.get(&placement.key) {
            Some(&pos) => buckets[pos].dishes.push(dish),
            None => {
                positions.insert(placement.key.clone(), buckets.len());
                buckets.push(Bucket {
                    key: placement.key,
                    main_name: placement.main_name,
                    sub_name: placement.sub_name,
                    dishes: vec![dish],
                });
            }
        }
    }

    tracing::debug!(
        "Classified dishes into {} buckets (tree: {})",
        buckets.len(),
        index.as_ref().map_or(0, CategoryIndex::len)
    );

    buckets
}

fn place_without_tree(dish: &Dish) -> Placement {
    // Without a tree there is no name source, every bucket reads as uncategorized
    Placement {
        key: BucketKey::new(dish.category_ref().unwrap_or(UNCATEGORIZED_KEY)),
        main_name: UNCATEGORIZED_NAME.to_string(),
        sub_name: String::new(),
    }
}

fn place_in_tree(category: CategoryRef<'_>) -> Placement {
    match category {
        CategoryRef::Root(root) => Placement {
            key: BucketKey::composite(Some(root.id.as_str()), None),
            main_name: root.name.clone(),
            sub_name: NO_SUBCATEGORY_NAME.to_string(),
        },
        CategoryRef::Sub { root, sub } if root.id != sub.id => Placement {
            key: BucketKey::composite(Some(root.id.as_str()), Some(sub.id.as_str())),
            main_name: root.name.clone(),
            sub_name: sub.name.clone(),
        },
        // A child sharing its parent's id is the root itself
        CategoryRef::Sub { root, .. } => place_in_tree(CategoryRef::Root(root)),
        CategoryRef::Unresolved => Placement {
            key: BucketKey::composite(None, None),
            main_name: UNCATEGORIZED_NAME.to_string(),
            sub_name: String::new(),
        },
    }
}
