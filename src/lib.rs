pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod recommender;

pub use error::{MenuError, Result};
pub use models::{Budget, Category, MenuItem, Recommendation, ScoredItem, Selection};
