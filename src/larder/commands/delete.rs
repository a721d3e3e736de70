use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, ids: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match catalog.delete(id)? {
            Some(recipe) => {
                result.add_message(CmdMessage::success(format!(
                    "Recipe deleted ({}): {}",
                    recipe.id, recipe.title
                )));
                result.affected_recipes.push(recipe);
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No recipe with id {}",
                id
            ))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{favorite, list, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_from_listing() {
        let mut catalog = Catalog::open(StoreFixture::new().with_kitchen().build());
        run(&mut catalog, &["curry".into(), "basil".into()]).unwrap();

        let listed = list::run(&catalog).unwrap();
        assert_eq!(listed.listed_recipes.len(), 2);
        assert!(catalog.get("curry").is_none());
    }

    #[test]
    fn unknown_id_warns() {
        let mut catalog = Catalog::open(StoreFixture::new().with_kitchen().build());
        let result = run(&mut catalog, &["ghost".into()]).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn favorite_id_survives_deletion() {
        let mut catalog = Catalog::open(StoreFixture::new().with_kitchen().build());
        favorite::toggle(&mut catalog, "salad").unwrap();
        run(&mut catalog, &["salad".into()]).unwrap();

        assert!(catalog.favorites().contains("salad"));
        assert!(catalog.favorite_recipes().is_empty());
    }
}
