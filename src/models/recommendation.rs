use serde::Serialize;

use crate::models::ScoredItem;

/// One category's chosen items for a single recommendation attempt.
///
/// Drink selections may repeat a name (one drink per person); bakery
/// selections never do. Totals are fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub items: Vec<ScoredItem>,
    pub total_price: u32,
    pub total_score: u32,
}

impl Selection {
    pub fn new(items: Vec<ScoredItem>) -> Self {
        let total_price = items.iter().map(|s| s.item.price).sum();
        let total_score = items.iter().map(|s| s.score).sum();
        Self {
            items,
            total_price,
            total_score,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names sorted alphabetically, for duplicate detection.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.items.iter().map(|s| s.item.name.clone()).collect();
        names.sort();
        names
    }
}

/// Key identifying a recommendation by the (sorted) names it contains.
///
/// Two recommendations with equal keys offer the same set of menu items,
/// whatever their prices or scores, and count as duplicates.
pub type DedupKey = (Vec<String>, Vec<String>);

/// A paired drink and bakery selection with aggregate price and score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub drinks: Selection,
    pub bakery: Selection,
    pub total_price: u32,
    pub total_score: u32,
}

impl Recommendation {
    pub fn new(drinks: Selection, bakery: Selection) -> Self {
        let total_price = drinks.total_price + bakery.total_price;
        let total_score = drinks.total_score + bakery.total_score;
        Self {
            drinks,
            bakery,
            total_price,
            total_score,
        }
    }

    pub fn dedup_key(&self) -> DedupKey {
        (self.drinks.sorted_names(), self.bakery.sorted_names())
    }
}
