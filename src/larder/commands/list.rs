use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::display_recipes;

pub fn run<S: DataStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let listed = display_recipes(catalog, catalog.recipes());
    Ok(CmdResult::default().with_listed_recipes(listed))
}
