use thiserror::Error;

/// Everything that can stop a scrape. All variants are terminal.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no job URL or job ID was given")]
    MissingArgument,

    #[error("could not extract job ID from {input:?}")]
    IdentifierNotFound { input: String },

    #[error("job {job_id} not found; the posting may have been removed or the ID is incorrect")]
    FetchNotFound { job_id: String },

    #[error("rate limited while fetching job {job_id}; wait a few minutes before trying again")]
    FetchRateLimited { job_id: String },

    #[error("error fetching job: {reason}")]
    FetchOther { reason: String },

    #[error("could not extract job description")]
    DescriptionMissing,

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: &'static str, reason: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize job record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Fetch failures and a missing description get the troubleshooting list.
    pub fn wants_tips(&self) -> bool {
        matches!(
            self,
            ScrapeError::IdentifierNotFound { .. }
                | ScrapeError::FetchNotFound { .. }
                | ScrapeError::FetchRateLimited { .. }
                | ScrapeError::FetchOther { .. }
                | ScrapeError::DescriptionMissing
        )
    }
}

pub const TROUBLESHOOTING_TIPS: [&str; 3] = [
    "1. Verify the job ID is correct",
    "2. Check if the job posting is still active",
    "3. Try again in a few minutes if rate limited",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let errors = [
            ScrapeError::MissingArgument,
            ScrapeError::IdentifierNotFound { input: "x".into() },
            ScrapeError::FetchNotFound { job_id: "1".into() },
            ScrapeError::FetchRateLimited { job_id: "1".into() },
            ScrapeError::FetchOther { reason: "timeout".into() },
            ScrapeError::DescriptionMissing,
        ];
        let mut messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn test_tips_only_for_pipeline_failures() {
        assert!(ScrapeError::DescriptionMissing.wants_tips());
        assert!(ScrapeError::FetchRateLimited { job_id: "1".into() }.wants_tips());
        assert!(!ScrapeError::MissingArgument.wants_tips());
        assert!(!ScrapeError::Config { reason: "bad".into() }.wants_tips());
    }
}
