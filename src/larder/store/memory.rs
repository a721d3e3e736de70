use super::DataStore;
use crate::error::{LarderError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw blob, e.g. to simulate corrupted storage.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every subsequent write fail, like a full or read-only disk.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LarderError::Store(format!("write to '{}' refused", key)));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Difficulty, Ingredient, Recipe};
    use crate::quantity::Quantity;
    use crate::store::save_recipes;

    /// Builds a store pre-loaded with a small, known recipe collection.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        recipes: Vec<Recipe>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                recipes: Vec::new(),
            }
        }

        pub fn with_recipe(mut self, recipe: Recipe) -> Self {
            self.recipes.push(recipe);
            self
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = self.recipes.len() + 1;
                let recipe = Recipe::new(
                    n.to_string(),
                    format!("Test Recipe {}", i + 1),
                    10,
                    Difficulty::Easy,
                )
                .with_ingredient(Ingredient::new(
                    "1",
                    format!("Ingredient {}", i + 1),
                    50.0,
                    "gram",
                    Quantity::Fixed(2.0),
                ));
                self.recipes.push(recipe);
            }
            self
        }

        /// The standard kitchen: four recipes across diet types.
        pub fn with_kitchen(self) -> Self {
            self.with_recipe(
                Recipe::new("curry", "Green Chicken Curry", 60, Difficulty::Medium)
                    .with_ingredient(Ingredient::new(
                        "1",
                        "Chicken thigh",
                        165.0,
                        "100 gram",
                        Quantity::Fixed(1.0),
                    ))
                    .with_ingredient(Ingredient::new(
                        "2",
                        "Coconut milk",
                        230.0,
                        "100 ml",
                        Quantity::Fixed(1.0),
                    ))
                    .with_diet_type("halal"),
            )
            .with_recipe(
                Recipe::new("salad", "Tofu Salad", 15, Difficulty::Easy)
                    .with_ingredient(Ingredient::new(
                        "1",
                        "Firm tofu",
                        80.0,
                        "piece",
                        Quantity::Range { min: 2.0, max: 3.0 },
                    ))
                    .with_diet_type("vegetarian"),
            )
            .with_recipe(
                Recipe::new("omelette", "Cheese Omelette", 10, Difficulty::Easy)
                    .with_ingredient(Ingredient::new(
                        "1",
                        "Egg",
                        70.0,
                        "egg",
                        Quantity::Fixed(3.0),
                    ))
                    .with_ingredient(Ingredient::new(
                        "2",
                        "Butter",
                        100.0,
                        "tablespoon",
                        Quantity::Fraction { num: 1.0, den: 2.0 },
                    ))
                    .with_diet_type("keto"),
            )
            .with_recipe(
                Recipe::new("basil", "Pork Basil Stir Fry", 20, Difficulty::Hard)
                    .with_ingredient(Ingredient::new(
                        "1",
                        "Minced pork",
                        240.0,
                        "100 gram",
                        Quantity::Fixed(1.5),
                    ))
                    .with_ingredient(Ingredient::new(
                        "2",
                        "Holy basil",
                        1.0,
                        "leaf",
                        Quantity::Unspecified,
                    )),
            )
        }

        /// Writes the collected recipes under the recipes key and returns the store.
        pub fn build(mut self) -> InMemoryStore {
            save_recipes(&mut self.store, &self.recipes).unwrap();
            self.store
        }
    }
}
