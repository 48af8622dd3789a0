use crate::extractors::{element_text, Extractor, ParsingContext};
use crate::model::ExtractedRecipe;
use log::debug;
use scraper::Selector;

/// Finds ingredient lists by class/id substring matching.
///
/// Covers the markup of common recipe plugins and hand-rolled Polish
/// recipe sites that carry no structured metadata. The title falls back
/// to the first `h1` on the page.
pub struct HtmlClassExtractor;

/// Selector patterns known to contain ingredient list items, in priority
/// order. The first pattern with at least one non-blank match supplies
/// the whole list; results are never merged across patterns.
const INGREDIENT_SELECTORS: [&str; 6] = [
    "[class*='ingredient'] li",
    "[class*='skladnik'] li",
    "[id*='ingredient'] li",
    "[id*='skladnik'] li",
    ".recipe-ingredients li",
    ".ingredients-list li",
];

impl Extractor for HtmlClassExtractor {
    fn extract(&self, context: &ParsingContext) -> ExtractedRecipe {
        let mut recipe = ExtractedRecipe::default();

        if let Ok(selector) = Selector::parse("h1") {
            if let Some(element) = context.document.select(&selector).next() {
                recipe.title = element_text(element);
            }
        }

        for selector_str in INGREDIENT_SELECTORS {
            if let Ok(selector) = Selector::parse(selector_str) {
                let items: Vec<String> = context
                    .document
                    .select(&selector)
                    .map(element_text)
                    .filter(|text| !text.is_empty())
                    .collect();

                if !items.is_empty() {
                    debug!(
                        "Found {} ingredients using selector: {selector_str}",
                        items.len()
                    );
                    recipe.ingredients = items;
                    break;
                }
            }
        }

        recipe
    }
}
