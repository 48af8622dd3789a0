use crate::config::ExtractConfig;
use crate::error::ExtractError;
use log::debug;
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Fetches page HTML for the extraction pipeline.
///
/// Identifies itself with a browser-like user agent and asks for Polish
/// content by default, since target sites are predominantly
/// Polish-language recipe sites. A non-success response is surfaced as
/// [`ExtractError::UpstreamStatus`] and never handed to the pipeline.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ExtractConfig) -> Result<Self, ExtractError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, config.user_agent.parse()?);
        headers.insert(ACCEPT, "text/html,application/xhtml+xml".parse()?);
        headers.insert(ACCEPT_LANGUAGE, config.accept_language.parse()?);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        debug!("Fetching page: {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
