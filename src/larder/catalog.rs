//! # Recipe Catalog
//!
//! The catalog owns the canonical in-memory recipe collection and the favorite
//! set, and keeps the store's copy in sync after every mutation.
//!
//! ## Lifecycle
//!
//! A catalog is opened once, from a [`DataStore`], and handed to whatever needs
//! it (normally the [`LarderApi`](crate::api::LarderApi) facade). Opening never
//! fails: stored data that is missing or unreadable is replaced by the built-in
//! seed collection.
//!
//! ## Reads
//!
//! Lookups return `Option`: an unknown id is an ordinary outcome, not an error.
//! Searches and listings preserve catalog order.
//!
//! ## Mutations
//!
//! `add`, `update`, `delete`, `record_view` and `toggle_favorite` change the
//! in-memory state first and then write the full collection back. If that
//! write fails the error is returned, but the in-memory change stays: there is
//! no rollback. `update` and `delete` return `None` when no recipe has the
//! given id; nothing is written in that case.

use crate::error::{LarderError, Result};
use crate::favorites::Favorites;
use crate::model::Recipe;
use crate::search::SearchQuery;
use crate::store::{self, DataStore};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};

pub struct Catalog<S: DataStore> {
    store: S,
    recipes: Vec<Recipe>,
    favorites: Favorites,
}

impl<S: DataStore> Catalog<S> {
    pub fn open(store: S) -> Self {
        let recipes = store::load_recipes(&store);
        let favorites = store::load_favorites(&store);
        debug!(
            recipes = recipes.len(),
            favorites = favorites.len(),
            "catalog opened"
        );
        Self {
            store,
            recipes,
            favorites,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// One recipe picked uniformly at random; `None` when the catalog is empty.
    pub fn random(&self) -> Option<&Recipe> {
        self.random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Recipe> {
        self.recipes.choose(rng)
    }

    /// Up to `count` distinct recipes, picked uniformly at random.
    pub fn sample(&self, count: usize) -> Vec<&Recipe> {
        self.sample_with(&mut rand::thread_rng(), count)
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&Recipe> {
        let mut picked = self.recipes.iter().choose_multiple(rng, count);
        picked.shuffle(rng);
        picked
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Recipe> {
        let results = query.apply(&self.recipes);
        debug!(
            keywords = ?query.keywords(),
            filters = ?query.filters(),
            matched = results.len(),
            "search"
        );
        results
    }

    /// The most viewed recipes, highest first. Ties keep catalog order.
    pub fn popular(&self, limit: usize) -> Vec<&Recipe> {
        let mut ranked: Vec<&Recipe> = self.recipes.iter().collect();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(limit);
        ranked
    }

    /// Distinct diet types in first-seen order.
    pub fn diet_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .filter_map(|recipe| recipe.diet_type.as_deref())
            .filter(|diet| seen.insert(*diet))
            .collect()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Favorite recipes that exist in the catalog, in catalog order.
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| self.favorites.contains(&recipe.id))
            .collect()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<&Favorites> {
        let now_favorite = self.favorites.toggle(id);
        info!(id, now_favorite, "favorite toggled");
        store::save_favorites(&mut self.store, &self.favorites)?;
        Ok(&self.favorites)
    }

    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;
        if self.get(&recipe.id).is_some() {
            return Err(LarderError::DuplicateRecipe(recipe.id));
        }
        info!(id = %recipe.id, title = %recipe.title, "recipe added");
        self.recipes.push(recipe);
        self.persist()
    }

    /// Replaces the recipe with the same id. Returns the previous record.
    pub fn update(&mut self, recipe: Recipe) -> Result<Option<Recipe>> {
        recipe.validate()?;
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == recipe.id) else {
            debug!(id = %recipe.id, "update matched no recipe");
            return Ok(None);
        };
        info!(id = %recipe.id, "recipe updated");
        let previous = std::mem::replace(slot, recipe);
        self.persist()?;
        Ok(Some(previous))
    }

    /// Removes the recipe with `id`. Returns the removed record.
    pub fn delete(&mut self, id: &str) -> Result<Option<Recipe>> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            debug!(id, "delete matched no recipe");
            return Ok(None);
        };
        let removed = self.recipes.remove(pos);
        info!(id, title = %removed.title, "recipe deleted");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Bumps the view counter. Returns the new count.
    pub fn record_view(&mut self, id: &str) -> Result<Option<u64>> {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        recipe.views += 1;
        let views = recipe.views;
        self.persist()?;
        Ok(Some(views))
    }

    /// Replaces the whole collection with the built-in seed.
    pub fn reset(&mut self) -> Result<()> {
        self.recipes = store::seed::recipes();
        info!(count = self.recipes.len(), "catalog reset to built-in recipes");
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        store::save_recipes(&mut self.store, &self.recipes)
    }
}
