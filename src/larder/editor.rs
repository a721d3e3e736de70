use crate::error::{LarderError, Result};
use crate::model::{Difficulty, Ingredient, Recipe};
use crate::quantity::Quantity;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Serializes a recipe into the JSON buffer shown in the editor.
pub fn to_buffer(recipe: &Recipe) -> Result<String> {
    let mut buffer = serde_json::to_string_pretty(recipe)?;
    buffer.push('\n');
    Ok(buffer)
}

/// Parses an edited buffer. Quantities are checked here, at ingestion.
pub fn from_buffer(buffer: &str) -> Result<Recipe> {
    if buffer.trim().is_empty() {
        return Err(LarderError::InvalidRecipe("the editor buffer is empty".into()));
    }
    Ok(serde_json::from_str(buffer)?)
}

/// Starting point for a new recipe: no id yet, one example ingredient.
pub fn new_recipe_template() -> Recipe {
    Recipe::new("", "", 30, Difficulty::Easy)
        .with_ingredient(Ingredient::new("1", "", 0.0, "gram", Quantity::Fixed(100.0)))
        .with_steps([""])
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(LarderError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| LarderError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(LarderError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(LarderError::Io)
}

/// Opens `initial` in the editor and returns the edited recipe.
pub fn edit_recipe(initial: &Recipe) -> Result<Recipe> {
    let temp_file = env::temp_dir().join(format!("larder_edit_{}.json", uuid::Uuid::new_v4()));
    fs::write(&temp_file, to_buffer(initial)?).map_err(LarderError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    from_buffer(&edited?)
}
