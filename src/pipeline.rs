use crate::config::ExtractConfig;
use crate::extractors::{
    Extractor, HeadingScanExtractor, HtmlClassExtractor, JsonLdExtractor, ParsingContext,
};
use crate::model::ExtractedRecipe;
use log::debug;
use scraper::Html;

/// Extract a recipe title and ingredient list from raw page HTML.
///
/// Strategies are tried in priority order: JSON-LD structured data,
/// class/id selector matching, then the heading scan. The first strategy
/// that yields a non-empty ingredient list settles the ingredients;
/// title resolution continues independently while the title is still
/// empty. Absence of a recipe is reported as an empty result, never as
/// an error.
///
/// The URL is carried for logging context only.
pub fn extract_recipe(html: &str, url: &str) -> ExtractedRecipe {
    extract_recipe_with_config(html, url, &ExtractConfig::default())
}

/// Like [`extract_recipe`], with explicit configuration (heading
/// keywords for the final strategy).
pub fn extract_recipe_with_config(
    html: &str,
    url: &str,
    config: &ExtractConfig,
) -> ExtractedRecipe {
    let context = ParsingContext {
        url: url.to_string(),
        document: Html::parse_document(html),
    };

    let extractors: Vec<Box<dyn Extractor>> = vec![
        Box::new(JsonLdExtractor),
        Box::new(HtmlClassExtractor),
        Box::new(HeadingScanExtractor::new(config.heading_keywords.clone())),
    ];

    let mut result = ExtractedRecipe::default();
    for extractor in extractors {
        let candidate = extractor.extract(&context);

        if result.title.is_empty() && !candidate.title.is_empty() {
            result.title = candidate.title.clone();
        }
        if candidate.has_ingredients() {
            result.ingredients = candidate.ingredients;
            break;
        }
    }

    debug!(
        "Extraction finished for {url}: title resolved = {}, {} ingredients",
        !result.title.is_empty(),
        result.ingredients.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let result = extract_recipe("", "https://example.com");
        assert_eq!(result, ExtractedRecipe::default());
    }

    #[test]
    fn test_title_from_json_ld_ingredients_from_selectors() {
        // JSON-LD names the recipe but carries no ingredients; the
        // selector strategy fills them in
        let html = r#"
            <html>
            <head>
                <script type="application/ld+json">
                    {"@type": "Recipe", "name": "Gofry"}
                </script>
            </head>
            <body>
                <h1>Inny tytuł</h1>
                <div class="ingredients-list"><li>mleko</li><li>mąka</li></div>
            </body>
            </html>
        "#;

        let result = extract_recipe(html, "https://example.com");
        assert_eq!(result.title, "Gofry");
        assert_eq!(result.ingredients, vec!["mleko", "mąka"]);
    }
}
