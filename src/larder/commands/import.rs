use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::model::Recipe;
use crate::store::DataStore;
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::helpers::{ensure_id, fill_calories};

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable import");
                result.add_message(CmdMessage::warning(format!(
                    "Failed to import {}: {}",
                    path.display(),
                    e
                )));
                continue;
            }
        };

        for (index, entry) in entries.into_iter().enumerate() {
            let mut recipe: Recipe = match serde_json::from_value(entry) {
                Ok(recipe) => recipe,
                Err(e) => {
                    warn!(path = %path.display(), index, error = %e, "skipping malformed recipe");
                    result.add_message(CmdMessage::warning(format!(
                        "Skipped entry {} in {}: {}",
                        index + 1,
                        path.display(),
                        e
                    )));
                    continue;
                }
            };
            ensure_id(&mut recipe);
            fill_calories(&mut recipe);
            if recipe.created_at.is_none() {
                recipe.created_at = Some(Utc::now());
            }

            match catalog.add(recipe.clone()) {
                Ok(()) => {
                    result.add_message(CmdMessage::info(format!(
                        "Imported ({}): {}",
                        recipe.id, recipe.title
                    )));
                    result.affected_recipes.push(recipe);
                }
                Err(e @ (LarderError::DuplicateRecipe(_) | LarderError::InvalidRecipe(_))) => {
                    warn!(id = %recipe.id, error = %e, "skipping recipe");
                    result.add_message(CmdMessage::warning(format!("Skipped: {}", e)));
                }
                Err(e) => return Err(e),
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        result.affected_recipes.len()
    )));
    Ok(result)
}

/// A recipe file holds either one recipe object or an array of them.
/// Entries are decoded one at a time so a bad one does not sink the rest.
fn read_entries(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content)? {
        Value::Array(entries) => Ok(entries),
        entry @ Value::Object(_) => Ok(vec![entry]),
        _ => Err(LarderError::InvalidRecipe(
            "expected a recipe object or an array of recipes".into(),
        )),
    }
}
