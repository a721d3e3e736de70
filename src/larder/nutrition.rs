//! # Calorie Aggregation
//!
//! Pure reductions over ingredient lists. Nothing here is cached: recipes hold
//! a couple of dozen ingredients at most, so totals are recomputed whenever a
//! recipe is shown.
//!
//! Both the recipe page and the recipe editor go through [`Quantity::amount`],
//! so a range such as `"2-3"` contributes its mean wherever calories are counted.

use crate::model::Ingredient;
use crate::quantity::Quantity;
use serde::Serialize;

/// The number a quantity contributes to calorie sums.
pub fn normalize_quantity(quantity: &Quantity) -> f64 {
    quantity.amount()
}

pub fn ingredient_calories(ingredient: &Ingredient) -> f64 {
    normalize_quantity(&ingredient.quantity) * ingredient.calories_per_unit
}

/// Sum of `amount × calories per unit` over all ingredients.
pub fn total_calories(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(ingredient_calories).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub calculated_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieBreakdown {
    pub ingredients: Vec<EnrichedIngredient>,
    pub total_calories: f64,
}

/// Attaches each ingredient's calorie contribution and the running total,
/// as shown in the recipe editor.
pub fn enrich_ingredients(ingredients: &[Ingredient]) -> CalorieBreakdown {
    let mut total = 0.0;
    let enriched = ingredients
        .iter()
        .map(|ingredient| {
            let calories = ingredient_calories(ingredient);
            total += calories;
            EnrichedIngredient {
                ingredient: ingredient.clone(),
                calculated_calories: calories,
            }
        })
        .collect();

    CalorieBreakdown {
        ingredients: enriched,
        total_calories: total,
    }
}
