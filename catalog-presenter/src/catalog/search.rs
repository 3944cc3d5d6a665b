//! Name search used by the storefront search box

use shared::models::Dish;

use super::collate::fold_name;

/// Case-insensitive substring query over dish names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishQuery {
    folded: String,
}

impl DishQuery {
    pub fn new(query: &str) -> Self {
        Self {
            folded: fold(query.trim()),
        }
    }

    /// Blank queries match every dish
    pub fn is_blank(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        self.is_blank() || fold(&dish.name).contains(&self.folded)
    }

    pub fn filter<'a, I>(&self, dishes: I) -> Vec<&'a Dish>
    where
        I: IntoIterator<Item = &'a Dish>,
    {
        dishes.into_iter().filter(|dish| self.matches(dish)).collect()
    }
}

fn fold(s: &str) -> String {
    fold_name(s).collect()
}
