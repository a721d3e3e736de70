use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{display_recipes, recipe_by_id};

/// Fetches a recipe without counting it as a view.
pub fn run<S: DataStore>(catalog: &Catalog<S>, id: &str) -> Result<CmdResult> {
    let recipe = recipe_by_id(catalog, id)?;
    Ok(CmdResult::default().with_listed_recipes(display_recipes(catalog, [recipe])))
}
