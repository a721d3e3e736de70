use crate::error::{LarderError, Result};
use crate::quantity::Quantity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.pad(label)
    }
}

impl FromStr for Difficulty {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(LarderError::InvalidRecipe(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    /// Free-form nutrition category ("protein", "fat", ...).
    #[serde(default)]
    pub nutrition: String,
    pub calories_per_unit: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantity: Quantity,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        calories_per_unit: f64,
        unit: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nutrition: String::new(),
            calories_per_unit,
            unit: unit.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    /// Minutes.
    pub cook_time: u32,
    pub difficulty: Difficulty,
    /// Precomputed total as entered by an admin. Not kept in sync with
    /// the ingredient list; see [`Recipe::computed_calories`].
    pub calories: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(
        rename = "diet_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_type: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        cook_time: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: String::new(),
            cook_time,
            difficulty,
            calories: 0,
            ingredients: Vec::new(),
            steps: Vec::new(),
            video_url: None,
            diet_type: None,
            views: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_diet_type(mut self, diet_type: impl Into<String>) -> Self {
        self.diet_type = Some(diet_type.into());
        self
    }

    pub fn with_steps<I, T>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Calorie total derived from the ingredient list.
    pub fn computed_calories(&self) -> f64 {
        crate::nutrition::total_calories(&self.ingredients)
    }

    /// True when the stored total disagrees with the ingredient sum
    /// by more than one calorie.
    pub fn calories_are_stale(&self) -> bool {
        (f64::from(self.calories) - self.computed_calories()).abs() > 1.0
    }

    /// Checks admin input before it enters the catalog.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(LarderError::InvalidRecipe("id cannot be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(LarderError::InvalidRecipe(format!(
                "recipe {} has an empty title",
                self.id
            )));
        }
        for ingredient in &self.ingredients {
            if ingredient.name.trim().is_empty() {
                return Err(LarderError::InvalidRecipe(format!(
                    "recipe {} has an ingredient without a name",
                    self.id
                )));
            }
            if !ingredient.calories_per_unit.is_finite() || ingredient.calories_per_unit < 0.0 {
                return Err(LarderError::InvalidRecipe(format!(
                    "ingredient '{}' has invalid calories per unit ({})",
                    ingredient.name, ingredient.calories_per_unit
                )));
            }
            let amount = ingredient.quantity.amount();
            if !amount.is_finite() || amount < 0.0 {
                return Err(LarderError::InvalidRecipe(format!(
                    "ingredient '{}' has invalid quantity ({})",
                    ingredient.name, ingredient.quantity
                )));
            }
        }
        Ok(())
    }
}
