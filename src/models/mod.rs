pub mod budget;
pub mod item;
pub mod recommendation;

pub use budget::Budget;
pub use item::{Category, MenuItem, ScoredItem};
pub use recommendation::{DedupKey, Recommendation, Selection};
