use crate::models::ScoredItem;
use crate::recommender::constants::{POOL_FLOOR, POOL_FRACTION};

/// Bound one category's scored items to a working pool.
///
/// Keeps the top `max(max(required, POOL_FLOOR), ceil(POOL_FRACTION * n))`
/// items under (score descending, price ascending, name ascending). The
/// ordering only bounds search cost; it is not the final ranking.
pub fn reduce_pool(mut scored: Vec<ScoredItem>, required: usize) -> Vec<ScoredItem> {
    let floor = required.max(POOL_FLOOR);
    let fraction_bound = ((scored.len() as f64) * POOL_FRACTION).ceil() as usize;
    let bound = floor.max(fraction_bound);

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.item.price.cmp(&b.item.price))
            .then(a.item.name.cmp(&b.item.name))
    });
    scored.truncate(bound);
    scored
}
