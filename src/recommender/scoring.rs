use std::collections::HashSet;

use crate::models::{MenuItem, ScoredItem};
use crate::recommender::constants::NEUTRAL_SCORE;

/// Annotate items with their relevance against the requested tags.
///
/// Score is the number of item tags intersecting the requested set,
/// compared case-insensitively. With no requested tags every item gets
/// the neutral score, so nothing is discriminated but downstream
/// weighting stays positive. Pure: same inputs, same scores.
pub fn score_items(items: &[MenuItem], requested: &[String]) -> Vec<ScoredItem> {
    if requested.is_empty() {
        return items
            .iter()
            .map(|item| ScoredItem::new(item.clone(), NEUTRAL_SCORE))
            .collect();
    }

    let requested: HashSet<String> = requested.iter().map(|t| t.to_lowercase()).collect();

    items
        .iter()
        .map(|item| {
            let score = item
                .tags
                .iter()
                .filter(|t| requested.contains(&t.to_lowercase()))
                .count() as u32;
            ScoredItem::new(item.clone(), score)
        })
        .collect()
}
