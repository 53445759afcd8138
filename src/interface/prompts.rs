use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::menu::MenuCatalog;
use crate::models::Budget;
use crate::recommender::constants::MAX_REQUESTED_TAGS;

/// Prompt for the spending ceiling.
pub fn prompt_budget() -> Result<Budget> {
    let unlimited = Confirm::new()
        .with_prompt("No budget limit?")
        .default(true)
        .interact()?;

    if unlimited {
        return Ok(Budget::Unlimited);
    }

    let input: String = Input::new()
        .with_prompt("Maximum budget (KRW)")
        .default("15000".to_string())
        .interact_text()?;

    let max: u32 = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    Ok(Budget::Limit(max))
}

/// Prompt for the number of drinks (one per person).
pub fn prompt_drink_count() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many drinks (one per person)?")
        .default("1".to_string())
        .interact_text()?;

    let count: usize = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if count == 0 {
        return Err(MenuError::InvalidInput(
            "Drink count must be at least 1".to_string(),
        ));
    }

    Ok(count)
}

/// Prompt for the number of bakery items per set.
pub fn prompt_bakery_count() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many bakery items per set?")
        .default("2".to_string())
        .interact_text()?;

    let count: usize = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if count == 0 {
        return Err(MenuError::InvalidInput(
            "Bakery count must be at least 1".to_string(),
        ));
    }

    Ok(count)
}

/// Prompt for preference tags with fuzzy matching against the known tags.
pub fn prompt_tags(known_tags: &[String]) -> Result<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();

    while tags.len() < MAX_REQUESTED_TAGS {
        let input: String = Input::new()
            .with_prompt("Enter a taste tag (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if tags.iter().any(|t| t.to_lowercase() == input.to_lowercase()) {
            println!("Already added: {}", input);
            continue;
        }

        // Try exact match first (case-insensitive)
        let exact_match = known_tags
            .iter()
            .find(|t| t.to_lowercase() == input.to_lowercase());

        if let Some(tag) = exact_match {
            tags.push(tag.clone());
            println!("Added: {}", tag);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&String, f64)> = known_tags
            .iter()
            .map(|t| (t, jaro_winkler(&t.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching tag found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let tag = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", tag))
                .default(true)
                .interact()?;

            if confirm {
                tags.push(tag.clone());
                println!("Added: {}", tag);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates.iter().take(5).map(|(t, _)| (*t).clone()).collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                tags.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(tags)
}

/// Collect all user constraints for set recommendation.
pub fn collect_user_constraints(
    catalog: &MenuCatalog,
) -> Result<(Budget, usize, usize, Vec<String>)> {
    let budget = prompt_budget()?;
    let drink_count = prompt_drink_count()?;
    let bakery_count = prompt_bakery_count()?;
    let tags = prompt_tags(&catalog.all_tags())?;

    Ok((budget, drink_count, bakery_count, tags))
}
