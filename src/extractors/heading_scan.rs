use crate::config::default_heading_keywords;
use crate::extractors::{element_text, Extractor, ParsingContext};
use crate::model::ExtractedRecipe;
use log::debug;
use scraper::{ElementRef, Selector};

/// Last-resort strategy: walk heading-like elements, match their text
/// against the configured ingredients-section keywords, and take the
/// `<ul>` that follows the first matching heading.
///
/// Resolves ingredients only; the title is left to earlier strategies.
pub struct HeadingScanExtractor {
    keywords: Vec<String>,
}

impl HeadingScanExtractor {
    /// Keywords are matched case-insensitively as substrings of the
    /// heading text.
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }
}

impl Default for HeadingScanExtractor {
    fn default() -> Self {
        Self::new(default_heading_keywords())
    }
}

fn next_element_sibling<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap).next()
}

/// Locate the list associated with a matched heading.
///
/// Prefers the heading's next element sibling if it is a `<ul>`, then
/// the parent's next element sibling. Returns `None` on a dead end so
/// the caller can continue with later headings.
fn find_following_list<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    if let Some(sibling) = next_element_sibling(heading) {
        if sibling.value().name() == "ul" {
            return Some(sibling);
        }
    }

    let parent = heading.parent().and_then(ElementRef::wrap)?;
    let sibling = next_element_sibling(parent)?;
    if sibling.value().name() == "ul" {
        Some(sibling)
    } else {
        None
    }
}

fn list_items(list: ElementRef) -> Vec<String> {
    let selector = Selector::parse("li").unwrap();
    list.select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

impl Extractor for HeadingScanExtractor {
    fn extract(&self, context: &ParsingContext) -> ExtractedRecipe {
        let selector = Selector::parse("h1, h2, h3, h4, h5, h6, strong, b").unwrap();

        for heading in context.document.select(&selector) {
            let text = element_text(heading).to_lowercase();
            if !self.keywords.iter().any(|keyword| text.contains(keyword)) {
                continue;
            }

            if let Some(list) = find_following_list(heading) {
                let items = list_items(list);
                if !items.is_empty() {
                    debug!(
                        "Found {} ingredients after heading: {text}",
                        items.len()
                    );
                    return ExtractedRecipe {
                        title: String::new(),
                        ingredients: items,
                    };
                }
            }
            // dead end, keep scanning later headings
        }

        ExtractedRecipe::default()
    }
}
