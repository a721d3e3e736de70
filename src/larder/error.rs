use crate::quantity::QuantityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Recipe already exists: {0}")]
    DuplicateRecipe(String),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("Invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("Invalid body metrics: {0}")]
    InvalidMetrics(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;
