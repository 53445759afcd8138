use std::collections::HashSet;

use bakery_set_maker_rs::models::{Budget, Category, MenuItem};
use bakery_set_maker_rs::recommender::{recommend, RecommendRequest};

fn item(category: Category, name: &str, price: u32, tags: &[&str]) -> MenuItem {
    MenuItem::new(
        category,
        name,
        price,
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

fn sample_drinks() -> Vec<MenuItem> {
    vec![
        item(Category::Drink, "Americano", 4000, &["bitter", "classic"]),
        item(Category::Drink, "Strawberry Latte", 5000, &["sweet", "milky"]),
    ]
}

fn sample_bakery() -> Vec<MenuItem> {
    vec![
        item(Category::Bakery, "Bagel", 3000, &["plain", "chewy"]),
        item(Category::Bakery, "Chocolate Scone", 3500, &["sweet", "rich"]),
        item(Category::Bakery, "Croissant", 4000, &["buttery", "flaky"]),
    ]
}

fn request(tags: &[&str], drinks: usize, bakery: usize, budget: Budget, seed: u64) -> RecommendRequest {
    let mut request = RecommendRequest::new(
        tags.iter().map(|t| t.to_string()).collect(),
        drinks,
        bakery,
        budget,
    );
    request.seed = Some(seed);
    request
}

#[test]
fn test_budget_is_respected_across_seeds() {
    for seed in 0..20 {
        let req = request(&[], 1, 1, Budget::Limit(8000), seed);
        let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

        assert!(!sets.is_empty(), "seed {}: no sets found", seed);
        assert!(sets.len() <= req.target_sets);
        for set in &sets {
            assert!(
                set.total_price <= 8000,
                "seed {}: set cost {} over budget",
                seed,
                set.total_price
            );
        }
    }
}

#[test]
fn test_unlimited_budget_fills_target_count() {
    // 2 drinks x 3 bakery items = 6 distinct feasible pairs, well above
    // the target of 3.
    let req = request(&[], 1, 1, Budget::Unlimited, 13);
    let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();
    assert_eq!(sets.len(), req.target_sets);
}

#[test]
fn test_unlimited_budget_caps_at_distinct_combination_count() {
    // A single drink and a single bakery item admit exactly one pair.
    let drinks = vec![item(Category::Drink, "Americano", 4000, &[])];
    let bakery = vec![item(Category::Bakery, "Bagel", 3000, &[])];
    let req = request(&[], 1, 1, Budget::Unlimited, 13);

    let sets = recommend(&drinks, &bakery, &req).unwrap();
    assert_eq!(sets.len(), 1);
}

#[test]
fn test_bakery_count_above_pool_is_infeasible() {
    // 4 distinct bakery items required, only 3 exist.
    let req = request(&[], 1, 4, Budget::Unlimited, 1);
    let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();
    assert!(sets.is_empty());
}

#[test]
fn test_unmatched_tag_still_produces_sets() {
    // No item carries "smoky"; every score is zero but feasibility is
    // price-only, so sets still come back.
    let req = request(&["smoky"], 1, 1, Budget::Unlimited, 3);
    let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

    assert!(!sets.is_empty());
    for set in &sets {
        assert_eq!(set.total_score, 0);
    }
}

#[test]
fn test_single_feasible_combination_in_large_pool() {
    // 30 bakery items force randomized sampling; the budget admits only
    // the single cheapest pairing. A short result, no error.
    let drinks = vec![item(Category::Drink, "Americano", 4000, &[])];
    let mut bakery = vec![item(Category::Bakery, "Mini Tart", 1000, &[])];
    for i in 0..29 {
        bakery.push(item(
            Category::Bakery,
            &format!("Gateau {:02}", i),
            9000,
            &[],
        ));
    }

    let mut req = request(&[], 1, 1, Budget::Limit(5000), 7);
    req.max_attempts = 300;

    let sets = recommend(&drinks, &bakery, &req).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].bakery.items[0].item.name, "Mini Tart");
}

#[test]
fn test_bakery_selections_have_distinct_names() {
    for seed in 0..10 {
        let req = request(&[], 1, 2, Budget::Unlimited, seed);
        let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

        assert!(!sets.is_empty());
        for set in &sets {
            assert_eq!(set.bakery.len(), 2);
            let names: HashSet<String> = set.bakery.sorted_names().into_iter().collect();
            assert_eq!(names.len(), 2, "seed {}: bakery names repeat", seed);
        }
    }
}

#[test]
fn test_drink_selections_fill_person_count_with_repeats_allowed() {
    // 4 drinks from 2 distinct names: repeats are unavoidable and legal.
    let req = request(&[], 4, 1, Budget::Unlimited, 2);
    let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

    assert!(!sets.is_empty());
    for set in &sets {
        assert_eq!(set.drinks.len(), 4);
        let distinct: HashSet<String> = set.drinks.sorted_names().into_iter().collect();
        assert!(distinct.len() <= 2);
    }
}

#[test]
fn test_no_duplicate_sets_in_result() {
    for seed in 0..10 {
        let req = request(&[], 1, 1, Budget::Unlimited, seed);
        let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

        let keys: HashSet<_> = sets.iter().map(|s| s.dedup_key()).collect();
        assert_eq!(keys.len(), sets.len(), "seed {}: duplicate sets", seed);
    }
}

#[test]
fn test_results_sorted_by_score_descending() {
    for seed in 0..10 {
        let req = request(&["sweet", "rich"], 1, 2, Budget::Unlimited, seed);
        let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

        for window in sets.windows(2) {
            assert!(
                window[0].total_score >= window[1].total_score,
                "seed {}: scores out of order",
                seed
            );
        }
    }
}

#[test]
fn test_totals_match_selection_sums() {
    let req = request(&["sweet"], 2, 2, Budget::Limit(20000), 17);
    let sets = recommend(&sample_drinks(), &sample_bakery(), &req).unwrap();

    assert!(!sets.is_empty());
    for set in &sets {
        let drink_price: u32 = set.drinks.items.iter().map(|s| s.item.price).sum();
        let bakery_price: u32 = set.bakery.items.iter().map(|s| s.item.price).sum();
        assert_eq!(set.total_price, drink_price + bakery_price);
        assert_eq!(set.total_score, set.drinks.total_score + set.bakery.total_score);
    }
}
