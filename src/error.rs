use thiserror::Error;

/// Errors that can occur around the extraction pipeline.
///
/// The extraction core itself never fails: a page where nothing can be
/// extracted yields an empty [`ExtractedRecipe`](crate::ExtractedRecipe).
/// These variants cover the surrounding service concerns: input
/// validation, the upstream page fetch, and configuration.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to fetch the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream site answered with a non-success status
    #[error("Failed to fetch recipe: upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Required input was not provided
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
