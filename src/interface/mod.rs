pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_constraints, prompt_bakery_count, prompt_budget, prompt_drink_count, prompt_tags,
};
pub use render::{display_menu, display_recommendations, format_price};
