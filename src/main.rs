use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use job_scraper_lib::error::TROUBLESHOOTING_TIPS;
use job_scraper_lib::{logger, pipeline, report, ScrapeError, ScraperConfig};

#[derive(Parser)]
#[command(name = "job_scraper")]
#[command(about = "Fetch one public job posting and save it as text and JSON")]
struct Cli {
    /// Job posting URL containing currentJobId=<digits>, or a bare job ID
    input: Option<String>,

    /// Directory for job-<id>.txt and job-<id>.json (defaults to JOB_SCRAPER_OUTPUT_DIR or .)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

const USAGE: &str = r#"Usage: job_scraper "<LinkedIn Job URL>"

Example:
  job_scraper "https://www.linkedin.com/jobs/collections/recommended/?currentJobId=4338745874"

Or provide just the job ID:
  job_scraper "4338745874""#;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };
    logger::init();

    match scrape(cli) {
        Ok(()) => {
            println!("\n✓ Script completed successfully!");
            ExitCode::SUCCESS
        }
        Err(ScrapeError::MissingArgument) => {
            eprintln!("{}", USAGE);
            ExitCode::from(1)
        }
        // Diagnostics and tips both go to stderr; stdout carries only the report.
        Err(e) => {
            eprintln!("\n❌ {}", e);
            if e.wants_tips() {
                eprintln!("\nTroubleshooting tips:");
                for tip in TROUBLESHOOTING_TIPS {
                    eprintln!("{}", tip);
                }
            }
            ExitCode::from(1)
        }
    }
}

fn scrape(cli: Cli) -> Result<(), ScrapeError> {
    let input = cli
        .input
        .filter(|s| !s.trim().is_empty())
        .ok_or(ScrapeError::MissingArgument)?;

    let mut config = ScraperConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    info!("Starting job scraper (guest API, no auth required)...");
    let record = pipeline::run(&input, &config)?;
    println!("{}", report::render_console(&record));

    let paths = report::write_outputs(&record, &config.output_dir)?;
    println!("\n✓ Job description saved to: {}", paths.text.display());
    println!("✓ JSON data saved to: {}", paths.json.display());
    Ok(())
}
