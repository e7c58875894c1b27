pub mod config;
pub mod error;
pub mod extractor;
pub mod input_resolver;
pub mod logger;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod scraper;

// Exporting types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use extractor::{Extractor, PostingFields, NOT_AVAILABLE};
pub use input_resolver::{JobId, ResolvedInput};
pub use pipeline::run;
pub use record::JobRecord;
pub use report::OutputPaths;
pub use scraper::Scraper;
