use log::{debug, warn};
use reqwest::blocking::Client;

use crate::error::{HarvestError, Result};

/// Source of page HTML. The harvester only ever asks for one page at a time.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain blocking GET; no retries, no custom headers.
///
/// Only transport failures are errors. An error page (404 for a red link,
/// say) comes back as HTML like any other and is judged on its content.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let fetch_error = |e: reqwest::Error| HarvestError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(fetch_error)?;
        if !response.status().is_success() {
            warn!("{} answered {}", url, response.status());
        }
        response.text().map_err(fetch_error)
    }
}

/// Convenience wrapper for one-off fetches.
pub fn fetch_html(url: &str) -> Result<String> {
    HttpFetcher::new().fetch(url)
}
