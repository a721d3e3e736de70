use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let diet_types = catalog
        .diet_types()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(CmdResult::default().with_diet_types(diet_types))
}
