//! # Storage Layer
//!
//! Larder persists into a small key-value store, the same shape as a browser's
//! local storage: each key holds one opaque serialized blob, and every save
//! overwrites the whole value. There are no partial writes and no versioning.
//!
//! ## Keys
//!
//! - [`RECIPES_KEY`]: the full recipe collection as a JSON array
//! - [`FAVORITES_KEY`]: the favorite recipe ids as a JSON array
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key in the data directory
//! - [`memory::InMemoryStore`]: blobs held in a map, for tests
//!
//! ## Loading
//!
//! [`load_recipes`] never fails. A missing key, an unreadable file or a blob
//! that no longer parses all fall back to the built-in [`seed`] collection;
//! the latter two are logged as warnings.

use crate::error::Result;
use crate::favorites::Favorites;
use crate::model::Recipe;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;
pub mod seed;

pub const RECIPES_KEY: &str = "recipes";
pub const FAVORITES_KEY: &str = "favorites";

/// Abstract key-value interface for persisted blobs.
pub trait DataStore {
    /// Read the value stored under `key`, or `None` if nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Loads the persisted collection, falling back to the seed.
pub fn load_recipes<S: DataStore>(store: &S) -> Vec<Recipe> {
    let blob = match store.read(RECIPES_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("no stored recipes, using the built-in collection");
            return seed::recipes();
        }
        Err(e) => {
            warn!(error = %e, "could not read stored recipes, using the built-in collection");
            return seed::recipes();
        }
    };

    match serde_json::from_str::<Vec<Recipe>>(&blob) {
        Ok(recipes) => {
            debug!(count = recipes.len(), "loaded stored recipes");
            recipes
        }
        Err(e) => {
            warn!(error = %e, "stored recipes are corrupt, using the built-in collection");
            seed::recipes()
        }
    }
}

pub fn save_recipes<S: DataStore>(store: &mut S, recipes: &[Recipe]) -> Result<()> {
    let blob = serde_json::to_string_pretty(recipes)?;
    store.write(RECIPES_KEY, &blob)
}

/// Loads the favorite set; missing or unreadable data yields an empty set.
pub fn load_favorites<S: DataStore>(store: &S) -> Favorites {
    match store.read(FAVORITES_KEY) {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
            warn!(error = %e, "stored favorites are corrupt, starting empty");
            Favorites::default()
        }),
        Ok(None) => Favorites::default(),
        Err(e) => {
            warn!(error = %e, "could not read stored favorites, starting empty");
            Favorites::default()
        }
    }
}

pub fn save_favorites<S: DataStore>(store: &mut S, favorites: &Favorites) -> Result<()> {
    let blob = serde_json::to_string_pretty(favorites)?;
    store.write(FAVORITES_KEY, &blob)
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn missing_key_loads_seed() {
        let store = InMemoryStore::new();
        assert_eq!(load_recipes(&store), seed::recipes());
    }

    #[test]
    fn corrupt_blob_loads_seed() {
        let store = InMemoryStore::new().with_value(RECIPES_KEY, "{not json");
        assert_eq!(load_recipes(&store), seed::recipes());
    }

    #[test]
    fn malformed_quantity_counts_as_corrupt() {
        let blob = r#"[{"id": "1", "title": "Soup", "cookTime": 5, "difficulty": "easy",
            "calories": 10, "ingredients": [{"id": "1", "name": "Salt",
            "caloriesPerUnit": 0, "quantity": "a lot"}]}]"#;
        let store = InMemoryStore::new().with_value(RECIPES_KEY, blob);
        assert_eq!(load_recipes(&store), seed::recipes());
    }

    #[test]
    fn saved_recipes_take_precedence() {
        let mut store = InMemoryStore::new();
        let recipes = vec![Recipe::new("x", "Toast", 3, Difficulty::Easy)];
        save_recipes(&mut store, &recipes).unwrap();
        assert_eq!(load_recipes(&store), recipes);
    }

    #[test]
    fn favorites_roundtrip_and_tolerate_corruption() {
        let mut store = InMemoryStore::new();
        assert!(load_favorites(&store).is_empty());

        let mut favorites = Favorites::default();
        favorites.toggle("7");
        save_favorites(&mut store, &favorites).unwrap();
        assert!(load_favorites(&store).contains("7"));

        let store = InMemoryStore::new().with_value(FAVORITES_KEY, "[1, 2");
        assert!(load_favorites(&store).is_empty());
    }
}
