use std::time::Duration;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::import_recipe_with_config;
use crate::model::ExtractedRecipe;
use crate::pipeline::extract_recipe_with_config;

/// Represents the input source for an extraction
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the page from a URL
    Url(String),
    /// Use already-fetched HTML content
    Html(String),
}

/// Entry point for the builder API
pub struct RecipeExtractor;

impl RecipeExtractor {
    /// Create a new builder
    pub fn builder() -> RecipeExtractorBuilder {
        RecipeExtractorBuilder::default()
    }
}

/// Builder for configuring and executing recipe extractions
#[derive(Debug, Default)]
pub struct RecipeExtractorBuilder {
    source: Option<InputSource>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_language: Option<String>,
    extra_keywords: Vec<String>,
    keywords: Option<Vec<String>>,
}

impl RecipeExtractorBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeExtractor;
    ///
    /// let builder = RecipeExtractor::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to raw HTML
    ///
    /// Use this when the page has already been fetched; no network
    /// request is made.
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeExtractor;
    ///
    /// let builder = RecipeExtractor::builder()
    ///     .html("<html><h1>Pierogi</h1></html>");
    /// ```
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Set the page fetch timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the user agent sent with page requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the Accept-Language header sent with page requests
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Add a heading keyword to the configured set
    ///
    /// The heading scan matches section headings against these keywords
    /// (case-insensitive substring). The defaults cover Polish pages;
    /// adding e.g. `"ingredients"` extends the scan to English pages.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.extra_keywords.push(keyword.into());
        self
    }

    /// Replace the heading keyword set entirely
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Execute the extraction
    ///
    /// Returns [`ExtractError::MissingInput`] if no source was
    /// configured. A page where nothing can be extracted is not an
    /// error; it yields an empty [`ExtractedRecipe`].
    pub async fn execute(self) -> Result<ExtractedRecipe, ExtractError> {
        let source = self.source.ok_or_else(|| {
            ExtractError::MissingInput("no input source configured; call url() or html()".into())
        })?;

        let mut config = ExtractConfig::default();
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(accept_language) = self.accept_language {
            config.accept_language = accept_language;
        }
        if let Some(keywords) = self.keywords {
            config.heading_keywords = keywords;
        }
        config.heading_keywords.extend(self.extra_keywords);

        match source {
            InputSource::Url(url) => import_recipe_with_config(&url, &config).await,
            InputSource::Html(html) => Ok(extract_recipe_with_config(&html, "", &config)),
        }
    }
}
