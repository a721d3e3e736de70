use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &mut Catalog<S>) -> Result<CmdResult> {
    catalog.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog reset to the {} built-in recipes",
        catalog.len()
    )));
    Ok(result)
}
