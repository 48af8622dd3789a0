use crate::extractors::{Extractor, ParsingContext};
use crate::model::ExtractedRecipe;
use html_escape::decode_html_entities;
use log::debug;
use scraper::Selector;
use serde_json::Value;

/// Reads schema.org `Recipe` data out of `application/ld+json` script
/// blocks. Blocks are tried in document order and the first block that
/// contains a Recipe node wins.
pub struct JsonLdExtractor;

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Clean up JSON strings before parsing
fn sanitize_json(json_str: &str) -> String {
    // Remove any leading/trailing whitespace
    let mut cleaned = json_str.trim().to_string();

    // Handle cases where there might be leading garbage before the JSON
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // Remove any trailing comma followed by closing brace/bracket
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    // Remove any HTML comments that might be present
    cleaned = cleaned.replace(r"<!--", "").replace("-->", "");

    cleaned
}

/// Whether a JSON-LD node is typed as a schema.org Recipe.
///
/// `@type` may be a single string or an array of strings; both shapes
/// occur in the wild.
fn is_recipe_type(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// Resolve the candidate Recipe node inside one parsed JSON-LD block.
///
/// Handles the three shapes sites emit: a `@graph` bundle, a top-level
/// array of entities, and a plain top-level object.
fn find_recipe_node(json_ld: &Value) -> Option<&Value> {
    if let Some(graph) = json_ld.get("@graph") {
        return graph.as_array()?.iter().find(|item| is_recipe_type(item));
    }
    if let Some(items) = json_ld.as_array() {
        return items.iter().find(|item| is_recipe_type(item));
    }
    if is_recipe_type(json_ld) {
        Some(json_ld)
    } else {
        None
    }
}

fn recipe_from_node(node: &Value) -> ExtractedRecipe {
    let title = node
        .get("name")
        .and_then(Value::as_str)
        .map(|name| decode_html_symbols(name).trim().to_string())
        .unwrap_or_default();

    let ingredients = match node.get("recipeIngredient") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(|entry| decode_html_symbols(entry).trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    ExtractedRecipe { title, ingredients }
}

impl Extractor for JsonLdExtractor {
    fn extract(&self, context: &ParsingContext) -> ExtractedRecipe {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();

        for script in context.document.select(&selector) {
            let cleaned_json = sanitize_json(&script.inner_html());
            let json_ld = match serde_json::from_str::<Value>(&cleaned_json) {
                Ok(value) => value,
                Err(err) => {
                    // not a usable source, move on to the next block
                    debug!("Skipping unparsable JSON-LD block: {err}");
                    continue;
                }
            };

            if let Some(node) = find_recipe_node(&json_ld) {
                debug!("Found schema.org Recipe node in JSON-LD");
                return recipe_from_node(node);
            }
        }

        ExtractedRecipe::default()
    }
}
