pub mod assemble;
pub mod combos;
pub mod constants;
pub mod pool;
pub mod scoring;

pub use assemble::{recommend, RecommendRequest};
pub use combos::{generator_for, CombinationGenerator, Replacement};
pub use constants::*;
pub use pool::reduce_pool;
pub use scoring::score_items;
