use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration for fetching and extracting recipes.
///
/// Target sites are predominantly Polish-language recipe sites, so the
/// defaults ask for Polish content and the heading scan recognizes the
/// Polish "ingredients" section markers. Both can be overridden.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Accept-Language header sent with page requests
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    /// Keywords that mark an ingredients section heading, matched
    /// case-insensitively as substrings of the heading text
    #[serde(default = "default_heading_keywords")]
    pub heading_keywords: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            heading_keywords: default_heading_keywords(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_accept_language() -> String {
    "pl-PL,pl;q=0.9".to_string()
}

pub(crate) fn default_heading_keywords() -> Vec<String> {
    // accented and unaccented spellings of the Polish "ingredients"
    vec!["składniki".to_string(), "skladniki".to_string()]
}

impl ExtractConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__TIMEOUT, RECIPE__ACCEPT_LANGUAGE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ExtractConfig::load`] for the layering rules.
pub fn load_config() -> Result<ExtractConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with RECIPE_ prefix
        // Use double underscore for nested: RECIPE__ACCEPT_LANGUAGE
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
