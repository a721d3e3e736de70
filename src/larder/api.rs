//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every larder operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Catalog`], opened once from a [`DataStore`]
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or file formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `LarderApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LarderApi<FileStore>`
//! - Testing: `LarderApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::energy::{ActivityLevel, BodyMetrics};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct LarderApi<S: DataStore> {
    catalog: Catalog<S>,
    data_dir: PathBuf,
}

impl<S: DataStore> LarderApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            catalog: Catalog::open(store),
            data_dir,
        }
    }

    pub fn list_recipes(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn get_recipe(&self, id: &str) -> Result<CmdResult> {
        commands::get::run(&self.catalog, id)
    }

    pub fn show_recipe(&mut self, id: &str) -> Result<CmdResult> {
        commands::view::run(&mut self.catalog, id)
    }

    pub fn search_recipes<F: AsRef<str>>(&self, query: &str, filters: &[F]) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query, filters)
    }

    pub fn random_recipes(&self, count: Option<usize>) -> Result<CmdResult> {
        commands::random::run(&self.catalog, count)
    }

    pub fn popular_recipes(&self, limit: usize) -> Result<CmdResult> {
        commands::popular::run(&self.catalog, limit)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<CmdResult> {
        commands::favorite::toggle(&mut self.catalog, id)
    }

    pub fn favorite_recipes(&self) -> Result<CmdResult> {
        commands::favorite::list(&self.catalog)
    }

    pub fn create_recipe(&mut self, recipe: Recipe) -> Result<CmdResult> {
        commands::create::run(&mut self.catalog, recipe)
    }

    pub fn update_recipe(&mut self, recipe: Recipe) -> Result<CmdResult> {
        commands::update::run(&mut self.catalog, recipe)
    }

    pub fn delete_recipes(&mut self, ids: &[String]) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, ids)
    }

    pub fn import_recipes(&mut self, paths: Vec<PathBuf>) -> Result<CmdResult> {
        commands::import::run(&mut self.catalog, paths)
    }

    pub fn diet_types(&self) -> Result<CmdResult> {
        commands::tags::run(&self.catalog)
    }

    pub fn energy(&self, metrics: BodyMetrics, level: ActivityLevel) -> Result<CmdResult> {
        commands::energy::run(metrics, level)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.catalog)
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayRecipe, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::Sex;
    use crate::model::Difficulty;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api() -> LarderApi<InMemoryStore> {
        LarderApi::new(
            StoreFixture::new().with_kitchen().build(),
            PathBuf::from("unused"),
        )
    }

    #[test]
    fn dispatches_reads() {
        let api = api();
        assert_eq!(api.list_recipes().unwrap().listed_recipes.len(), 4);
        assert_eq!(
            api.search_recipes("tofu", &["vegetarian"])
                .unwrap()
                .listed_recipes
                .len(),
            1
        );
        assert_eq!(api.random_recipes(Some(2)).unwrap().listed_recipes.len(), 2);
        assert_eq!(api.diet_types().unwrap().diet_types.len(), 3);
    }

    #[test]
    fn show_counts_views_but_get_does_not() {
        let mut api = api();
        api.get_recipe("curry").unwrap();
        api.show_recipe("curry").unwrap();
        assert_eq!(api.catalog().get("curry").unwrap().views, 1);

        let popular = api.popular_recipes(1).unwrap();
        assert_eq!(popular.listed_recipes[0].recipe.id, "curry");
    }

    #[test]
    fn dispatches_mutations() {
        let mut api = api();
        api.create_recipe(Recipe::new("toast", "Toast", 3, Difficulty::Easy))
            .unwrap();
        api.update_recipe(Recipe::new("toast", "Butter Toast", 4, Difficulty::Easy))
            .unwrap();
        api.toggle_favorite("toast").unwrap();
        assert_eq!(api.favorite_recipes().unwrap().listed_recipes.len(), 1);

        api.delete_recipes(&["toast".to_string()]).unwrap();
        assert!(api.catalog().get("toast").is_none());

        api.reset().unwrap();
        assert_eq!(api.catalog().len(), 56);
    }

    #[test]
    fn dispatches_energy_and_config() {
        let temp = TempDir::new().unwrap();
        let api = LarderApi::new(InMemoryStore::new(), temp.path().to_path_buf());

        let metrics = BodyMetrics {
            weight_kg: 60.0,
            height_cm: 165.0,
            age: 28,
            sex: Sex::Female,
        };
        assert!(api
            .energy(metrics, ActivityLevel::Light)
            .unwrap()
            .energy
            .is_some());
        assert!(api.config(ConfigAction::ShowAll).unwrap().config.is_some());
    }
}
