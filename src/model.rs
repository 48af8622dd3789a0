use serde::{Deserialize, Serialize};

/// A recipe extracted from a web page.
///
/// Both fields may be empty: an empty title or an empty ingredient list
/// means the data was not found on the page. That is a valid terminal
/// outcome, not an error. Ingredient entries are trimmed and never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
}

impl ExtractedRecipe {
    /// Whether any ingredients were resolved.
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}
