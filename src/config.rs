use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use log::debug;
use url::Url;

use crate::error::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where to fetch from, how long to wait, and where to write.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Site origin; both the guest API endpoint and the canonical view URL hang off it.
    pub base_url: Url,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScraperConfig {
    /// Defaults, overridden by `JOB_SCRAPER_*` variables (a `.env` file is honoured).
    pub fn from_env() -> Result<Self, ScrapeError> {
        let _ = dotenv();
        let mut config = ScraperConfig::default();

        if let Ok(raw) = env::var("JOB_SCRAPER_BASE_URL") {
            config.base_url = parse_base_url(&raw)?;
        }
        if let Ok(raw) = env::var("JOB_SCRAPER_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ScrapeError::Config {
                reason: format!("JOB_SCRAPER_TIMEOUT_SECS must be a whole number of seconds, got {:?}", raw),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(raw) = env::var("JOB_SCRAPER_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(raw);
        }

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ScrapeError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Guest API endpoint for one posting.
    pub fn posting_endpoint(&self, job_id: &str) -> Result<Url, ScrapeError> {
        self.base_url
            .join(&format!("jobs-guest/jobs/api/jobPosting/{}", job_id))
            .map_err(|e| ScrapeError::Config { reason: format!("cannot build endpoint URL: {}", e) })
    }

    /// Canonical public view URL, e.g. `https://www.linkedin.com/jobs/view/123`.
    pub fn view_url(&self, job_id: &str) -> String {
        format!("{}/jobs/view/{}", self.base_url.as_str().trim_end_matches('/'), job_id)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(raw.trim()).map_err(|e| ScrapeError::Config {
        reason: format!("JOB_SCRAPER_BASE_URL {:?} is not a valid URL: {}", raw, e),
    })?;
    if url.cannot_be_a_base() {
        return Err(ScrapeError::Config { reason: format!("{:?} cannot be used as a base URL", raw) });
    }
    Ok(url)
}
