use crate::model::ExtractedRecipe;
use scraper::Html;

mod heading_scan;
mod html_class;
mod json_ld;

pub use heading_scan::HeadingScanExtractor;
pub use html_class::HtmlClassExtractor;
pub use json_ld::JsonLdExtractor;

/// Per-request parse context shared by all extractors.
///
/// Built fresh for every extraction; the document is parsed once and
/// borrowed by each strategy in turn. The URL is carried for logging
/// context only and never influences extraction.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

/// A single extraction strategy.
///
/// Strategies never fail: a page the strategy cannot handle yields an
/// empty [`ExtractedRecipe`], which tells the pipeline to move on to the
/// next strategy.
pub trait Extractor {
    fn extract(&self, context: &ParsingContext) -> ExtractedRecipe;
}

/// Collapse an element's text nodes into a single trimmed string.
pub(crate) fn element_text(element: scraper::ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
