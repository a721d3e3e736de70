use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{ensure_id, fill_calories};

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, mut recipe: Recipe) -> Result<CmdResult> {
    ensure_id(&mut recipe);
    fill_calories(&mut recipe);
    recipe.created_at = Some(Utc::now());
    recipe.updated_at = None;
    recipe.views = 0;

    catalog.add(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe created ({}): {}",
        recipe.id, recipe.title
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}
