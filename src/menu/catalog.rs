use std::collections::BTreeSet;

use crate::models::{Category, MenuItem};

/// The loaded menus for both categories.
///
/// Read-only once built; recommendation requests never mutate it.
pub struct MenuCatalog {
    drinks: Vec<MenuItem>,
    bakery: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(drinks: Vec<MenuItem>, bakery: Vec<MenuItem>) -> Self {
        Self { drinks, bakery }
    }

    pub fn drinks(&self) -> &[MenuItem] {
        &self.drinks
    }

    pub fn bakery(&self) -> &[MenuItem] {
        &self.bakery
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Drink => &self.drinks,
            Category::Bakery => &self.bakery,
        }
    }

    /// Every tag used across both menus, sorted and deduplicated.
    pub fn all_tags(&self) -> Vec<String> {
        self.drinks
            .iter()
            .chain(self.bakery.iter())
            .flat_map(|item| item.tags.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Total item count across both menus.
    pub fn len(&self) -> usize {
        self.drinks.len() + self.bakery.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty() && self.bakery.is_empty()
    }
}
