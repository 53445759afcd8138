pub mod catalog;
pub mod loader;

pub use catalog::MenuCatalog;
pub use loader::{load_menu, parse_tags};
