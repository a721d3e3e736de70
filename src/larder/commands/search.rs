use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::search::SearchQuery;
use crate::store::DataStore;

use super::helpers::display_recipes;

pub fn run<S: DataStore, F: AsRef<str>>(
    catalog: &Catalog<S>,
    query: &str,
    filters: &[F],
) -> Result<CmdResult> {
    let query = SearchQuery::new(query, filters);
    let matched = catalog.search(&query);
    Ok(CmdResult::default().with_listed_recipes(display_recipes(catalog, matched)))
}
