use log::info;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extractor::Extractor;
use crate::input_resolver::{self, JobId};
use crate::record::JobRecord;
use crate::scraper::Scraper;

/// Resolve → fetch → extract. Nothing is written; that is left to the caller.
pub fn run(input: &str, config: &ScraperConfig) -> Result<JobRecord, ScrapeError> {
    let resolved = input_resolver::resolve(input, config)?;
    info!("Scraping {}", resolved.source_url);
    let scraper = Scraper::new(config.clone())?;
    let html = scraper.fetch_posting(&resolved.job_id)?;
    build_record(&resolved.job_id, &html, scraper.config())
}

/// Extraction half of the pipeline, for markup that is already in hand.
pub fn build_record(job_id: &JobId, html: &str, config: &ScraperConfig) -> Result<JobRecord, ScrapeError> {
    let fields = Extractor::new()?.extract(html)?;
    info!("Extracted \"{}\" at {}", fields.title, fields.company);
    Ok(JobRecord::new(job_id.clone(), config.view_url(job_id.as_str()), fields))
}
