//! Blocking page fetch feeding raw HTML into the pipeline.
//!
//! No retries and no bot-evasion tricks: one GET with browser-like headers,
//! redirects followed, body capped by ureq's default read limit.

use std::time::Duration;

use url::Url;

use crate::error::{ExtractorError, Result};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Check that `input` is an absolute http(s) URL with a host.
pub fn validate_product_url(input: &str) -> Result<Url> {
    let invalid = |reason: &str| ExtractorError::InvalidUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("only http and https are supported"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    Ok(url)
}

/// HTTP client for product pages.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    agent: ureq::Agent,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .user_agent(DEFAULT_USER_AGENT)
            .build();
        Self {
            agent: config.into(),
        }
    }

    /// GET the page and return its body as text.
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        let url = validate_product_url(url)?;
        tracing::debug!(url = %url, "fetching product page");

        let fetch_failed = |e: ureq::Error| ExtractorError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .call()
            .map_err(fetch_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractorError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.body_mut().read_to_string().map_err(fetch_failed)?;
        tracing::debug!(bytes = html.len(), "fetched product page");
        Ok(html)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
