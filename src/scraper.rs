use reqwest::blocking::Client;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};
use reqwest::StatusCode;
use log::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::input_resolver::JobId;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Fetches one posting from the guest API.
pub struct Scraper {
    client: Client,
    config: ScraperConfig,
}

impl Scraper {
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(browser_headers())
            .cookie_store(true)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Scraper { client, config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// One GET, no retries. Returns the body exactly as received.
    pub fn fetch_posting(&self, job_id: &JobId) -> Result<String, ScrapeError> {
        let endpoint = self.config.posting_endpoint(job_id.as_str())?;
        info!("Fetching job details...");
        debug!("GET {}", endpoint);

        let resp = self.client.get(endpoint).send().map_err(|e| ScrapeError::FetchOther {
            reason: describe_transport_error(&e),
        })?;

        let status = resp.status();
        debug!("Response status: {}", status);
        match status {
            StatusCode::NOT_FOUND => {
                warn!("Job {} returned 404", job_id);
                Err(ScrapeError::FetchNotFound { job_id: job_id.to_string() })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Rate limited while fetching job {}", job_id);
                Err(ScrapeError::FetchRateLimited { job_id: job_id.to_string() })
            }
            s if !s.is_success() => Err(ScrapeError::FetchOther {
                reason: format!("Request failed with status code {}", s.as_u16()),
            }),
            _ => resp.text().map_err(|e| ScrapeError::FetchOther {
                reason: format!("failed to read response body: {}", e),
            }),
        }
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
