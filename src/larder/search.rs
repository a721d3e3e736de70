//! # Query Engine
//!
//! A search combines two independent predicates:
//!
//! - **keywords**: the query text split on commas. A recipe matches when any
//!   keyword is a substring of its title or of any ingredient name.
//! - **filters**: diet tags. A recipe matches when any filter equals its diet
//!   type, or is a substring of any ingredient name ("chicken" as a filter
//!   finds chicken dishes whatever their diet tag).
//!
//! An empty side matches everything, and a recipe must satisfy both sides.
//! Filters are only lower-cased: they are not trimmed, and a blank filter is
//! kept (it matches any recipe that has at least one ingredient). A recipe
//! without a diet type never equals a filter.
//! All comparisons are case-insensitive substring checks; there is no scoring,
//! so results keep catalog order.

use crate::model::Recipe;

/// Splits query text on commas into trimmed, lower-cased, non-empty keywords.
pub fn parse_keywords(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: Vec<String>,
    filters: Vec<String>,
}

impl SearchQuery {
    pub fn new<F: AsRef<str>>(query: &str, filters: &[F]) -> Self {
        Self {
            keywords: parse_keywords(query),
            filters: filters
                .iter()
                .map(|filter| filter.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.filters.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let title = recipe.title.trim().to_lowercase();
        let ingredients: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.trim().to_lowercase())
            .collect();
        let in_ingredients =
            |needle: &str| ingredients.iter().any(|name| name.contains(needle));

        let query_matches = self.keywords.is_empty()
            || self
                .keywords
                .iter()
                .any(|keyword| title.contains(keyword.as_str()) || in_ingredients(keyword.as_str()));

        let diet = recipe.diet_type.as_deref().map(str::to_lowercase);
        let filter_matches = self.filters.is_empty()
            || self.filters.iter().any(|filter| {
                diet.as_deref() == Some(filter.as_str()) || in_ingredients(filter.as_str())
            });

        query_matches && filter_matches
    }

    /// Recipes that match, in the order given.
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        recipes
            .into_iter()
            .filter(|recipe| self.matches(recipe))
            .collect()
    }
}
