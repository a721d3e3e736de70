use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::display_recipes;

pub fn run<S: DataStore>(catalog: &Catalog<S>, limit: usize) -> Result<CmdResult> {
    let ranked = catalog.popular(limit);
    Ok(CmdResult::default().with_listed_recipes(display_recipes(catalog, ranked)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn most_viewed_first() {
        let mut catalog = Catalog::open(StoreFixture::new().with_kitchen().build());
        view::run(&mut catalog, "basil").unwrap();
        view::run(&mut catalog, "basil").unwrap();
        view::run(&mut catalog, "salad").unwrap();

        let result = run(&catalog, 2).unwrap();
        let ids: Vec<_> = result
            .listed_recipes
            .iter()
            .map(|dr| dr.recipe.id.as_str())
            .collect();
        assert_eq!(ids, vec!["basil", "salad"]);
    }
}
