use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::display_recipes;

/// One random recipe, or `count` distinct ones.
pub fn run<S: DataStore>(catalog: &Catalog<S>, count: Option<usize>) -> Result<CmdResult> {
    let picked = match count {
        Some(n) => catalog.sample(n),
        None => catalog.random().into_iter().collect(),
    };

    let mut result = CmdResult::default();
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_recipes(display_recipes(catalog, picked)))
}
