use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{MenuError, Result};
use crate::models::{Budget, Category, DedupKey, MenuItem, Recommendation};
use crate::recommender::combos::{generator_for, CombinationGenerator, Replacement};
use crate::recommender::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_SETS, MAX_REQUESTED_TAGS};
use crate::recommender::pool::reduce_pool;
use crate::recommender::scoring::score_items;

/// One recommendation request's constraints.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    /// Preference tags, at most [`MAX_REQUESTED_TAGS`].
    pub tags: Vec<String>,
    /// Drinks per set (one per person; repeats allowed).
    pub drink_count: usize,
    /// Bakery items per set (all distinct).
    pub bakery_count: usize,
    pub budget: Budget,
    /// Distinct sets aimed for.
    pub target_sets: usize,
    /// Attempt budget shared across the whole assembly loop.
    pub max_attempts: usize,
    /// Fixed RNG seed for reproducible output.
    pub seed: Option<u64>,
}

impl RecommendRequest {
    pub fn new(tags: Vec<String>, drink_count: usize, bakery_count: usize, budget: Budget) -> Self {
        Self {
            tags,
            drink_count,
            bakery_count,
            budget,
            target_sets: DEFAULT_TARGET_SETS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }

    /// Boundary contract checks. Violations fail fast; they are never
    /// coerced or retried.
    pub fn validate(&self) -> Result<()> {
        if self.drink_count == 0 {
            return Err(MenuError::InvalidInput(
                "drink count must be at least 1".to_string(),
            ));
        }
        if self.bakery_count == 0 {
            return Err(MenuError::InvalidInput(
                "bakery count must be at least 1".to_string(),
            ));
        }
        if self.target_sets == 0 {
            return Err(MenuError::InvalidInput(
                "target set count must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(MenuError::InvalidInput(
                "attempt budget must be at least 1".to_string(),
            ));
        }
        if self.tags.len() > MAX_REQUESTED_TAGS {
            return Err(MenuError::InvalidInput(format!(
                "at most {} tags may be requested",
                MAX_REQUESTED_TAGS
            )));
        }
        Ok(())
    }
}

/// Lazily yields candidate recommendations, one attempt per pull.
///
/// Each attempt draws a drink selection against the whole budget, then a
/// bakery selection against what remains. A failed bakery draw discards
/// the attempt whole; the drink is not reused.
struct CandidateStream {
    drinks: Box<dyn CombinationGenerator>,
    bakery: Box<dyn CombinationGenerator>,
    budget: Budget,
    attempts_left: usize,
    rng: StdRng,
}

impl Iterator for CandidateStream {
    type Item = Recommendation;

    fn next(&mut self) -> Option<Recommendation> {
        while self.attempts_left > 0 {
            self.attempts_left -= 1;

            let Some(drink_sel) = self.drinks.draw(self.budget, &mut self.rng) else {
                continue;
            };
            let Some(remaining) = self.budget.after_spending(drink_sel.total_price) else {
                continue;
            };
            let Some(bakery_sel) = self.bakery.draw(remaining, &mut self.rng) else {
                continue;
            };

            return Some(Recommendation::new(drink_sel, bakery_sel));
        }
        None
    }
}

/// Assemble up to `target_sets` distinct drink+bakery sets.
///
/// A short or empty result is a normal outcome: it means fewer distinct
/// feasible combinations exist (or were found within the attempt budget)
/// than requested. Input pools are never mutated.
pub fn recommend(
    drinks: &[MenuItem],
    bakery: &[MenuItem],
    request: &RecommendRequest,
) -> Result<Vec<Recommendation>> {
    request.validate()?;
    if drinks.is_empty() {
        return Err(MenuError::EmptyMenu(Category::Drink));
    }
    if bakery.is_empty() {
        return Err(MenuError::EmptyMenu(Category::Bakery));
    }

    let drink_pool = reduce_pool(score_items(drinks, &request.tags), request.drink_count);
    let bakery_pool = reduce_pool(score_items(bakery, &request.tags), request.bakery_count);

    let Some(drink_gen) = generator_for(&drink_pool, request.drink_count, Replacement::Allowed)
    else {
        return Ok(Vec::new());
    };
    let Some(bakery_gen) = generator_for(&bakery_pool, request.bakery_count, Replacement::Forbidden)
    else {
        return Ok(Vec::new());
    };

    let rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let candidates = CandidateStream {
        drinks: drink_gen,
        bakery: bakery_gen,
        budget: request.budget,
        attempts_left: request.max_attempts,
        rng,
    };

    let mut seen: HashSet<DedupKey> = HashSet::new();
    let mut accepted: Vec<Recommendation> = Vec::with_capacity(request.target_sets);

    for candidate in candidates {
        if !seen.insert(candidate.dedup_key()) {
            continue;
        }
        accepted.push(candidate);
        if accepted.len() >= request.target_sets {
            break;
        }
    }

    // Stable sort: insertion order breaks score ties.
    accepted.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    Ok(accepted)
}
