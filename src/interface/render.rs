use crate::models::{MenuItem, Recommendation, Selection};

/// Display recommended sets in a formatted list.
pub fn display_recommendations(sets: &[Recommendation]) {
    if sets.is_empty() {
        println!("No matching sets found. Try fewer tags or a larger budget.");
        return;
    }

    println!();
    println!("=== Recommended Sets ===");

    for (i, set) in sets.iter().enumerate() {
        println!();
        println!(
            "Set {} - total {} KRW (tag score {})",
            i + 1,
            format_price(set.total_price),
            set.total_score
        );
        println!("  Drinks : {}", join_items(&set.drinks, ", "));
        println!("  Bakery : {}", join_items(&set.bakery, " / "));
    }

    println!();
}

fn join_items(selection: &Selection, separator: &str) -> String {
    selection
        .items
        .iter()
        .map(|s| format!("{} ({})", s.item.name, format_price(s.item.price)))
        .collect::<Vec<String>>()
        .join(separator)
}

/// Display one category's menu with prices and tags.
pub fn display_menu(items: &[MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        let tags_str = if item.tags.is_empty() {
            String::new()
        } else {
            format!("  #{}", item.tags.join(" #"))
        };

        println!(
            "  {:<width$} - {:>7} KRW{}",
            item.name,
            format_price(item.price),
            tags_str,
            width = max_name_len
        );
    }

    println!();
}

/// Format a KRW amount with thousands separators.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(4000), "4,000");
        assert_eq!(format_price(12500), "12,500");
        assert_eq!(format_price(1234567), "1,234,567");
    }
}
