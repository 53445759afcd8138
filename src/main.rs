use clap::Parser;
use std::path::Path;

use bakery_set_maker_rs::cli::{Cli, Command};
use bakery_set_maker_rs::error::Result;
use bakery_set_maker_rs::interface::{
    collect_user_constraints, display_menu, display_recommendations,
};
use bakery_set_maker_rs::menu::{load_menu, MenuCatalog};
use bakery_set_maker_rs::models::Category;
use bakery_set_maker_rs::recommender::{recommend, RecommendRequest};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend { json, seed } => cmd_recommend(&cli.drinks, &cli.bakery, json, seed),
        Command::Menu => cmd_menu(&cli.drinks, &cli.bakery),
        Command::Tags => cmd_tags(&cli.drinks, &cli.bakery),
    }
}

/// Load both menus, or print a hint and return `None` if a file is missing.
fn load_catalog(drinks_path: &str, bakery_path: &str) -> Result<Option<MenuCatalog>> {
    for path in [drinks_path, bakery_path] {
        if !Path::new(path).exists() {
            eprintln!("Menu file not found: {}", path);
            eprintln!("Pass --drinks/--bakery or place the CSV files in the current directory.");
            return Ok(None);
        }
    }

    let drinks = load_menu(drinks_path, Category::Drink)?;
    let bakery = load_menu(bakery_path, Category::Bakery)?;
    Ok(Some(MenuCatalog::new(drinks, bakery)))
}

/// Recommend drink and bakery sets based on user constraints.
fn cmd_recommend(drinks_path: &str, bakery_path: &str, json: bool, seed: Option<u64>) -> Result<()> {
    let Some(catalog) = load_catalog(drinks_path, bakery_path)? else {
        return Ok(());
    };

    if catalog.drinks().is_empty() || catalog.bakery().is_empty() {
        println!("A menu file has no usable rows; nothing to recommend.");
        return Ok(());
    }

    println!(
        "Loaded {} drinks and {} bakery items",
        catalog.drinks().len(),
        catalog.bakery().len()
    );
    println!();

    let (budget, drink_count, bakery_count, tags) = collect_user_constraints(&catalog)?;

    println!();
    println!(
        "Looking for sets of {} drink(s) + {} bakery item(s), budget {}...",
        drink_count, bakery_count, budget
    );
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }

    let mut request = RecommendRequest::new(tags, drink_count, bakery_count, budget);
    request.seed = seed;

    let sets = recommend(catalog.drinks(), catalog.bakery(), &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
    } else {
        display_recommendations(&sets);
    }

    Ok(())
}

/// Print both loaded menus.
fn cmd_menu(drinks_path: &str, bakery_path: &str) -> Result<()> {
    let Some(catalog) = load_catalog(drinks_path, bakery_path)? else {
        return Ok(());
    };

    display_menu(catalog.drinks(), "Drink Menu");
    display_menu(catalog.bakery(), "Bakery Menu");

    Ok(())
}

/// List every tag used across both menus.
fn cmd_tags(drinks_path: &str, bakery_path: &str) -> Result<()> {
    let Some(catalog) = load_catalog(drinks_path, bakery_path)? else {
        return Ok(());
    };

    let tags = catalog.all_tags();
    if tags.is_empty() {
        println!("No tags found in the loaded menus.");
        return Ok(());
    }

    println!("{} tags:", tags.len());
    for tag in tags {
        println!("  #{}", tag);
    }

    Ok(())
}
