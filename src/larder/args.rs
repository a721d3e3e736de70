use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "larder", version)]
#[command(about = "Recipe catalog: search by ingredient and diet, keep favorites, count calories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes, favorites and config (default: $LARDER_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all recipes
    #[command(alias = "ls")]
    List,

    /// Show a recipe with its calorie breakdown
    #[command(alias = "v")]
    Show { id: String },

    /// Search by comma-separated keywords and diet tags
    #[command(alias = "s")]
    Search {
        /// Keywords, e.g. "chicken, basil"
        #[arg(default_value = "")]
        query: String,

        /// Diet type or ingredient to filter by (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Pick a random recipe
    Random {
        /// Pick this many distinct recipes
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Pick the configured number of suggestions
        #[arg(long, conflicts_with = "count")]
        suggest: bool,
    },

    /// Most viewed recipes
    Popular {
        /// How many to show (default: popular-limit from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Toggle a recipe in or out of favorites
    Fav { id: String },

    /// List favorite recipes
    Favs,

    /// Create a recipe in the editor, or from a JSON file
    #[command(alias = "n")]
    Create {
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Edit a recipe in the editor
    #[command(alias = "e")]
    Edit { id: String },

    /// Replace a recipe with the one in a JSON file (matched by id)
    Update {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Import recipes from JSON files (one recipe or an array per file)
    Import {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// List the diet types in the catalog
    Tags,

    /// Daily energy needs (BMR, TDEE) and calorie targets
    Energy {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long)]
        sex: String,

        /// sedentary, light, moderate, active or very-active (default: from config)
        #[arg(long)]
        activity: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (popular-limit, suggestion-count, activity-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Replace the catalog with the built-in recipes
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}
