use clap::{Parser, Subcommand};

/// BakerySetMaker — recommends drink and bakery sets for a budget and taste tags.
#[derive(Parser, Debug)]
#[command(name = "bakery_set_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the drink menu CSV file.
    #[arg(long, default_value = "Drink_menu.csv")]
    pub drinks: String,

    /// Path to the bakery menu CSV file.
    #[arg(long, default_value = "Bakery_menu.csv")]
    pub bakery: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend drink and bakery sets interactively.
    Recommend {
        /// Print the result sets as JSON instead of formatted text.
        #[arg(long)]
        json: bool,

        /// Fix the sampling seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print both loaded menus.
    Menu,

    /// List every taste tag used across both menus.
    Tags,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            json: false,
            seed: None,
        }
    }
}
