use crate::catalog::Catalog;
use crate::commands::DisplayRecipe;
use crate::error::{LarderError, Result};
use crate::model::Recipe;
use crate::store::DataStore;

/// Pairs each recipe with its favorite flag.
pub fn display_recipes<'a, S, I>(catalog: &Catalog<S>, recipes: I) -> Vec<DisplayRecipe>
where
    S: DataStore,
    I: IntoIterator<Item = &'a Recipe>,
{
    let favorites = catalog.favorites();
    recipes
        .into_iter()
        .map(|recipe| DisplayRecipe {
            is_favorite: favorites.contains(&recipe.id),
            recipe: recipe.clone(),
        })
        .collect()
}

pub fn recipe_by_id<'a, S: DataStore>(catalog: &'a Catalog<S>, id: &str) -> Result<&'a Recipe> {
    catalog
        .get(id)
        .ok_or_else(|| LarderError::RecipeNotFound(id.to_string()))
}

/// Assigns a fresh id to a recipe that arrived without one.
pub fn ensure_id(recipe: &mut Recipe) {
    if recipe.id.trim().is_empty() {
        recipe.id = uuid::Uuid::new_v4().to_string();
    }
}

/// Fills the stored calorie total from the ingredients when it was left at zero.
pub fn fill_calories(recipe: &mut Recipe) {
    if recipe.calories == 0 && !recipe.ingredients.is_empty() {
        recipe.calories = recipe.computed_calories().round() as u32;
    }
}
