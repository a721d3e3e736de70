use crate::config::LarderConfig;
use crate::energy::EnergyReport;
use crate::model::Recipe;
use crate::nutrition::CalorieBreakdown;

pub mod config;
pub mod create;
pub mod delete;
pub mod energy;
pub mod favorite;
pub mod get;
pub mod helpers;
pub mod import;
pub mod list;
pub mod popular;
pub mod random;
pub mod reset;
pub mod search;
pub mod tags;
pub mod update;
pub mod view;

/// A recipe as a listing shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<DisplayRecipe>,
    pub breakdown: Option<CalorieBreakdown>,
    pub energy: Option<EnergyReport>,
    pub diet_types: Vec<String>,
    pub config: Option<LarderConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_breakdown(mut self, breakdown: CalorieBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    pub fn with_energy(mut self, report: EnergyReport) -> Self {
        self.energy = Some(report);
        self
    }

    pub fn with_diet_types(mut self, diet_types: Vec<String>) -> Self {
        self.diet_types = diet_types;
        self
    }

    pub fn with_config(mut self, config: LarderConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
