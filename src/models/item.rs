use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu category a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drink,
    Bakery,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Drink => write!(f, "drink"),
            Category::Bakery => write!(f, "bakery"),
        }
    }
}

/// A menu item with its price and taste tags.
///
/// Price is in KRW (no minor units). Tags are already cleaned by the
/// loader: no `#` markers, trimmed, deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub category: Category,
    pub name: String,
    pub price: u32,
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn new(category: Category, name: impl Into<String>, price: u32, tags: Vec<String>) -> Self {
        Self {
            category,
            name: name.into(),
            price,
            tags,
        }
    }

    /// Canonical key for lookups (lowercase name).
    #[inline]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for MenuItem {}

impl std::hash::Hash for MenuItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.name.to_lowercase().hash(state);
    }
}

/// A menu item annotated with its relevance score for one request.
///
/// The score never feeds back into the source item; it is recomputed per
/// request by the scorer.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub score: u32,
}

impl ScoredItem {
    pub fn new(item: MenuItem, score: u32) -> Self {
        Self { item, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem::new(
            Category::Bakery,
            "Croissant",
            4200,
            vec!["buttery".to_string(), "flaky".to_string()],
        )
    }

    #[test]
    fn test_key_is_lowercase() {
        let item = sample_item();
        assert_eq!(item.key(), "croissant");
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let item = sample_item();
        assert!(item.has_tag("Buttery"));
        assert!(item.has_tag("flaky"));
        assert!(!item.has_tag("sweet"));
    }

    #[test]
    fn test_equality_case_insensitive() {
        let item1 = sample_item();
        let mut item2 = sample_item();
        item2.name = "CROISSANT".to_string();
        assert_eq!(item1, item2);
    }

    #[test]
    fn test_equality_requires_same_category() {
        let item1 = sample_item();
        let mut item2 = sample_item();
        item2.category = Category::Drink;
        assert_ne!(item1, item2);
    }
}
