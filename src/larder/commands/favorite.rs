use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::display_recipes;

pub fn toggle<S: DataStore>(catalog: &mut Catalog<S>, id: &str) -> Result<CmdResult> {
    let title = catalog.get(id).map(|r| r.title.clone());
    let now_favorite = catalog.toggle_favorite(id)?.contains(id);

    let mut result = CmdResult::default();
    let label = title.as_deref().unwrap_or(id);
    if now_favorite {
        result.add_message(CmdMessage::success(format!("Added to favorites: {}", label)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed from favorites: {}",
            label
        )));
    }
    if title.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No recipe with id {} in the catalog",
            id
        )));
    }
    Ok(result)
}

/// Favorite recipes, in catalog order.
pub fn list<S: DataStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let favorites = catalog.favorite_recipes();
    let mut result = CmdResult::default();
    if favorites.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet."));
    }
    Ok(result.with_listed_recipes(display_recipes(catalog, favorites)))
}
