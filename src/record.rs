use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::extractor::PostingFields;
use crate::input_resolver::JobId;

/// A fully scraped posting. Built once, then only read by the writers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub seniority_level: String,
    pub url: String,
    pub description: String,
    #[serde(serialize_with = "iso_millis")]
    pub scraped_at: DateTime<Utc>,
}

impl JobRecord {
    pub fn new(job_id: JobId, url: String, fields: PostingFields) -> Self {
        JobRecord {
            job_id,
            title: fields.title,
            company: fields.company,
            location: fields.location,
            employment_type: fields.employment_type,
            seniority_level: fields.seniority_level,
            url,
            description: fields.description,
            scraped_at: Utc::now(),
        }
    }
}

// e.g. 2026-10-18T09:30:00.123Z
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
