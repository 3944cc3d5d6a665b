//! Ranker - display order for buckets and the dishes inside them

use std::collections::HashMap;

use shared::models::Dish;

use super::classifier::Bucket;
use super::collate::compare_names;

/// Priority assigned to categories missing from the table
pub const UNRANKED_PRIORITY: u32 = 999;

/// Editorial order of storefront categories, lower ranks first
const EDITORIAL_ORDER: &[(&str, u32)] = &[
    ("Выпечка", 1),
    ("Горячие блюда", 2),
    ("Супы", 3),
    ("Салаты", 4),
    ("Закуски", 5),
    ("Пельмени и вареники", 6),
    ("Гарниры", 7),
    ("Блюда из мяса", 8),
    ("Блюда из рыбы", 9),
    ("Каши", 10),
    ("Десерты", 11),
    ("Торты", 12),
    ("Заготовки", 13),
    ("Соусы", 14),
    ("Напитки", 15),
];

/// Category name to rank mapping used to order catalog sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: HashMap<String, u32>,
}

impl PriorityTable {
    /// Table with no ranked categories: sections sort purely by name
    pub fn empty() -> Self {
        Self {
            ranks: HashMap::new(),
        }
    }

    pub fn with_rank(mut self, name: impl Into<String>, rank: u32) -> Self {
        self.ranks.insert(name.into(), rank);
        self
    }

    pub fn priority_of(&self, name: &str) -> u32 {
        self.ranks.get(name).copied().unwrap_or(UNRANKED_PRIORITY)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        EDITORIAL_ORDER
            .iter()
            .map(|&(name, rank)| (name.to_string(), rank))
            .collect()
    }
}

impl FromIterator<(String, u32)> for PriorityTable {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

/// Sort dishes alphabetically by name (stable on equal names)
pub fn sort_dishes(dishes: &mut [&Dish]) {
    dishes.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Order buckets for display and sort each bucket's dishes
///
/// Buckets go by ascending priority of their main category name, ties
/// broken alphabetically. Buckets sharing a main name keep their
/// classification order.
pub fn rank<'a>(mut buckets: Vec<Bucket<'a>>, priorities: &PriorityTable) -> Vec<Bucket<'a>> {
    for bucket in &mut buckets {
        sort_dishes(&mut bucket.dishes);
    }

    buckets.sort_by(|a, b| {
        priorities
            .priority_of(&a.main_name)
            .cmp(&priorities.priority_of(&b.main_name))
            .then_with(|| compare_names(&a.main_name, &b.main_name))
    });

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::classifier::BucketKey;

    fn bucket<'a>(key: &str, main_name: &str, dishes: Vec<&'a Dish>) -> Bucket<'a> {
        Bucket {
            key: BucketKey::new(key),
            main_name: main_name.to_string(),
            sub_name: String::new(),
            dishes,
        }
    }

    fn main_names(buckets: &[Bucket<'_>]) -> Vec<String> {
        buckets.iter().map(|b| b.main_name.clone()).collect()
    }

    #[test]
    fn test_default_table() {
        let table = PriorityTable::default();
        assert_eq!(table.len(), 15);
        assert_eq!(table.priority_of("Выпечка"), 1);
        assert_eq!(table.priority_of("Горячие блюда"), 2);
        assert_eq!(table.priority_of("Напитки"), 15);
        assert_eq!(table.priority_of("Суши"), UNRANKED_PRIORITY);
    }

    #[test]
    fn test_ranked_before_unranked_and_unranked_alphabetical() {
        let buckets = vec![
            bucket("c", "Соленья", vec![]),
            bucket("a", "Горячие блюда", vec![]),
            bucket("d", "Азиатская кухня", vec![]),
            bucket("b", "Выпечка", vec![]),
        ];

        let ranked = rank(buckets, &PriorityTable::default());

        assert_eq!(
            main_names(&ranked),
            vec!["Выпечка", "Горячие блюда", "Азиатская кухня", "Соленья"]
        );
    }

    #[test]
    fn test_custom_table_overrides_order() {
        let table = PriorityTable::empty()
            .with_rank("Напитки", 1)
            .with_rank("Выпечка", 2);
        let buckets = vec![
            bucket("a", "Выпечка", vec![]),
            bucket("b", "Напитки", vec![]),
            bucket("c", "Горячие блюда", vec![]),
        ];

        let ranked = rank(buckets, &table);

        assert_eq!(main_names(&ranked), vec!["Напитки", "Выпечка", "Горячие блюда"]);
    }

    #[test]
    fn test_same_main_name_keeps_classification_order() {
        let buckets = vec![
            bucket("hot__soup", "Горячие блюда", vec![]),
            bucket("hot__none", "Горячие блюда", vec![]),
        ];

        let ranked = rank(buckets, &PriorityTable::default());

        assert_eq!(ranked[0].key.as_str(), "hot__soup");
        assert_eq!(ranked[1].key.as_str(), "hot__none");
    }

    #[test]
    fn test_dishes_sorted_within_bucket() {
        let plov = Dish::new("1", "Плов");
        let borsch = Dish::new("2", "Борщ");
        let shchi = Dish::new("3", "щи");
        let buckets = vec![bucket("hot", "Горячие блюда", vec![&plov, &shchi, &borsch])];

        let ranked = rank(buckets, &PriorityTable::default());
        let names: Vec<&str> = ranked[0].dishes.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["Борщ", "Плов", "щи"]);
    }
}
