use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{Category, MenuItem};

/// Raw CSV row: `name,price,tags`.
///
/// The tags cell holds the raw marker string, e.g. `"#sweet, #nutty"`.
#[derive(Debug, Deserialize)]
struct MenuRow {
    name: String,
    price: u32,
    tags: Option<String>,
}

/// Load one category's menu from a CSV file.
///
/// Fields are whitespace-trimmed; rows with an empty name are skipped.
pub fn load_menu<P: AsRef<Path>>(path: P, category: Category) -> Result<Vec<MenuItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut items = Vec::new();
    for row in reader.deserialize() {
        let row: MenuRow = row?;
        if row.name.is_empty() {
            continue;
        }
        let tags = row.tags.as_deref().map(parse_tags).unwrap_or_default();
        items.push(MenuItem::new(category, row.name, row.price, tags));
    }

    Ok(items)
}

/// Clean a raw tag string into a tag list.
///
/// Strips `#` markers, splits on commas, trims, drops empties, and
/// deduplicates keeping the first occurrence.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let stripped = raw.replace('#', "");
    let mut tags: Vec<String> = Vec::new();
    for part in stripped.split(',') {
        let tag = part.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
