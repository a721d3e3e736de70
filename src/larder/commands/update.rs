use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::DataStore;
use chrono::Utc;

/// Replaces the recipe sharing `recipe.id`. An unknown id changes nothing.
///
/// The creation time and view count survive the replacement unless the new
/// record carries its own.
pub fn run<S: DataStore>(catalog: &mut Catalog<S>, mut recipe: Recipe) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(existing) = catalog.get(&recipe.id) else {
        result.add_message(CmdMessage::warning(format!(
            "No recipe with id {}; nothing updated",
            recipe.id
        )));
        return Ok(result);
    };

    if recipe.created_at.is_none() {
        recipe.created_at = existing.created_at;
    }
    if recipe.views == 0 {
        recipe.views = existing.views;
    }
    recipe.updated_at = Some(Utc::now());

    catalog.update(recipe.clone())?;
    result.add_message(CmdMessage::success(format!(
        "Recipe updated ({}): {}",
        recipe.id, recipe.title
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}
