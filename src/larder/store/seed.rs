//! The built-in recipe collection, used until something has been saved.

use crate::model::Recipe;
use tracing::error;

const SEED_JSON: &str = include_str!("../../../data/seed_recipes.json");

pub fn recipes() -> Vec<Recipe> {
    serde_json::from_str(SEED_JSON).unwrap_or_else(|e| {
        error!(error = %e, "built-in recipe collection does not parse");
        Vec::new()
    })
}
