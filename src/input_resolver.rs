use std::fmt;
use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Token that marks an input as a posting-site URL rather than a bare ID.
pub const SITE_DOMAIN_TOKEN: &str = "linkedin.com";

static JOB_ID_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"currentJobId=(\d+)").expect("job id pattern is valid"));

/// Numeric posting identifier. Only the resolver builds one, so it is always `^\d+$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved input: the identifier plus the URL it came from (or the synthesized view URL).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub job_id: JobId,
    pub source_url: String,
}

/// Turn a posting URL or bare ID into a [`JobId`].
///
/// `currentJobId=<digits>` wins wherever it appears. Without it, a site URL is an
/// error and anything else must be a bare run of digits.
pub fn resolve_job_id(input: &str) -> Result<JobId, ScrapeError> {
    find_job_id(input).map(|(job_id, _)| job_id)
}

/// Resolve and keep the input as context; bare IDs get the canonical view URL.
pub fn resolve(input: &str, config: &ScraperConfig) -> Result<ResolvedInput, ScrapeError> {
    let (job_id, from_param) = find_job_id(input)?;
    let source_url = if from_param {
        input.trim().to_string()
    } else {
        config.view_url(job_id.as_str())
    };
    info!("Job ID: {}", job_id);
    Ok(ResolvedInput { job_id, source_url })
}

// The flag is true when the ID came from the query parameter.
fn find_job_id(input: &str) -> Result<(JobId, bool), ScrapeError> {
    let trimmed = input.trim();
    let not_found = || ScrapeError::IdentifierNotFound { input: input.to_string() };

    if let Some(digits) = JOB_ID_PARAM.captures(trimmed).and_then(|caps| caps.get(1)) {
        debug!("Found currentJobId={} in input", digits.as_str());
        return Ok((JobId(digits.as_str().to_string()), true));
    }
    if trimmed.contains(SITE_DOMAIN_TOKEN) {
        return Err(not_found());
    }
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    Ok((JobId(trimmed.to_string()), false))
}
