use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::models::{Budget, ScoredItem, Selection};
use crate::recommender::constants::{EXHAUSTIVE_COMBO_MAX, EXHAUSTIVE_POOL_MAX, ZERO_SCORE_WEIGHT};

/// Whether one selection may contain the same named item more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Duplicates permitted (drinks: one per person, repeats fine).
    Allowed,
    /// All chosen items must have distinct names (bakery combinations).
    Forbidden,
}

/// Draws candidate selections of a fixed size from one category's pool.
pub trait CombinationGenerator {
    /// Attempt one selection whose total price fits `ceiling`.
    ///
    /// `None` means this attempt found nothing feasible; the caller owns
    /// the attempt budget and decides whether to try again.
    fn draw(&self, ceiling: Budget, rng: &mut StdRng) -> Option<Selection>;
}

/// Pick the generation strategy for a pool: full enumeration while the
/// combination space stays small, weighted random sampling beyond that.
///
/// Returns `None` when the pool cannot satisfy the required size at all
/// (empty pool, or fewer distinct names than required without
/// replacement) so no attempts are wasted on it.
pub fn generator_for(
    pool: &[ScoredItem],
    required: usize,
    policy: Replacement,
) -> Option<Box<dyn CombinationGenerator>> {
    let pool: Vec<ScoredItem> = match policy {
        Replacement::Forbidden => dedup_by_name(pool),
        Replacement::Allowed => pool.to_vec(),
    };

    if pool.is_empty() {
        return None;
    }
    if policy == Replacement::Forbidden && required > pool.len() {
        return None;
    }

    if use_exhaustive(pool.len(), required, policy) {
        Some(Box::new(ExhaustiveGenerator::new(&pool, required, policy)))
    } else {
        Some(Box::new(SampledGenerator::new(pool, required, policy)))
    }
}

/// Sampling weight: the tag score, floored so zero-score items remain
/// selectable but systematically deprioritized.
fn weight(item: &ScoredItem) -> f64 {
    if item.score == 0 {
        ZERO_SCORE_WEIGHT
    } else {
        f64::from(item.score)
    }
}

/// Keep the first (best-ranked) row per name.
fn dedup_by_name(pool: &[ScoredItem]) -> Vec<ScoredItem> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|s| seen.insert(s.item.key()))
        .cloned()
        .collect()
}

fn use_exhaustive(pool_len: usize, required: usize, policy: Replacement) -> bool {
    if pool_len > EXHAUSTIVE_POOL_MAX {
        return false;
    }
    let combos = match policy {
        Replacement::Forbidden => binomial(pool_len as u64, required as u64),
        // Multisets of size K from P items: C(P + K - 1, K).
        Replacement::Allowed => binomial((pool_len + required - 1) as u64, required as u64),
    };
    combos.is_some_and(|c| c <= EXHAUSTIVE_COMBO_MAX)
}

/// C(n, k) with overflow reported as `None`.
fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

/// Enumerates every combination up front; each draw is a uniform random
/// choice among the ones the ceiling admits.
struct ExhaustiveGenerator {
    combos: Vec<Selection>,
}

impl ExhaustiveGenerator {
    fn new(pool: &[ScoredItem], required: usize, policy: Replacement) -> Self {
        let mut combos = Vec::new();
        let mut picked = Vec::with_capacity(required);
        enumerate(pool, required, policy, 0, &mut picked, &mut combos);
        Self { combos }
    }
}

impl CombinationGenerator for ExhaustiveGenerator {
    fn draw(&self, ceiling: Budget, rng: &mut StdRng) -> Option<Selection> {
        let feasible: Vec<&Selection> = self
            .combos
            .iter()
            .filter(|s| ceiling.allows(s.total_price))
            .collect();
        feasible.choose(rng).map(|s| (*s).clone())
    }
}

/// Index-ordered recursive enumeration. Without replacement the next
/// slot starts past the current index; with replacement it may repeat it
/// (non-decreasing indices, so each multiset appears exactly once).
fn enumerate(
    pool: &[ScoredItem],
    remaining: usize,
    policy: Replacement,
    start: usize,
    picked: &mut Vec<ScoredItem>,
    out: &mut Vec<Selection>,
) {
    if remaining == 0 {
        out.push(Selection::new(picked.clone()));
        return;
    }
    for i in start..pool.len() {
        picked.push(pool[i].clone());
        let next = match policy {
            Replacement::Forbidden => i + 1,
            Replacement::Allowed => i,
        };
        enumerate(pool, remaining - 1, policy, next, picked, out);
        picked.pop();
    }
}

/// One weighted random draw per attempt; rejects draws over the ceiling.
///
/// Best-effort: may find nothing within the caller's attempt budget even
/// when a feasible combination exists.
struct SampledGenerator {
    pool: Vec<ScoredItem>,
    required: usize,
    policy: Replacement,
}

impl SampledGenerator {
    fn new(pool: Vec<ScoredItem>, required: usize, policy: Replacement) -> Self {
        Self {
            pool,
            required,
            policy,
        }
    }
}

impl CombinationGenerator for SampledGenerator {
    fn draw(&self, ceiling: Budget, rng: &mut StdRng) -> Option<Selection> {
        let items: Vec<ScoredItem> = match self.policy {
            Replacement::Allowed => {
                let weights: Vec<f64> = self.pool.iter().map(weight).collect();
                let dist = WeightedIndex::new(&weights).ok()?;
                (0..self.required)
                    .map(|_| self.pool[dist.sample(rng)].clone())
                    .collect()
            }
            Replacement::Forbidden => self
                .pool
                .choose_multiple_weighted(rng, self.required, weight)
                .ok()?
                .cloned()
                .collect(),
        };

        let selection = Selection::new(items);
        ceiling.allows(selection.total_price).then_some(selection)
    }
}
