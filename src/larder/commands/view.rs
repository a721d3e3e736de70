use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::nutrition::enrich_ingredients;
use crate::store::DataStore;

use super::helpers::{display_recipes, recipe_by_id};

/// Shows a recipe with its calorie breakdown and counts the view.
pub fn run<S: DataStore>(catalog: &mut Catalog<S>, id: &str) -> Result<CmdResult> {
    recipe_by_id(catalog, id)?;
    catalog.record_view(id)?;

    let recipe = recipe_by_id(catalog, id)?;
    let breakdown = enrich_ingredients(&recipe.ingredients);
    let mut result = CmdResult::default();

    if recipe.calories_are_stale() {
        result.add_message(CmdMessage::warning(format!(
            "Stored total of {} kcal differs from the ingredient sum of {:.0} kcal",
            recipe.calories, breakdown.total_calories
        )));
    }

    let listed = display_recipes(catalog, [recipe]);
    Ok(result.with_listed_recipes(listed).with_breakdown(breakdown))
}
