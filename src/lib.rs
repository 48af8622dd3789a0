pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod pipeline;

pub use builder::{InputSource, RecipeExtractor, RecipeExtractorBuilder};
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use fetcher::PageFetcher;
pub use model::ExtractedRecipe;
pub use pipeline::{extract_recipe, extract_recipe_with_config};

/// Fetch a page and extract its recipe.
///
/// Convenience wrapper over [`PageFetcher`] and [`extract_recipe`] with
/// default configuration. An empty result means the page carried no
/// recognizable recipe data; fetch and input problems are reported as
/// [`ExtractError`].
pub async fn import_recipe(url: &str) -> Result<ExtractedRecipe, ExtractError> {
    import_recipe_with_config(url, &ExtractConfig::default()).await
}

/// Like [`import_recipe`], with explicit configuration.
pub async fn import_recipe_with_config(
    url: &str,
    config: &ExtractConfig,
) -> Result<ExtractedRecipe, ExtractError> {
    if url.trim().is_empty() {
        return Err(ExtractError::MissingInput("url".into()));
    }

    let fetcher = PageFetcher::new(config)?;
    let html = fetcher.fetch(url).await?;

    Ok(extract_recipe_with_config(&html, url, config))
}
