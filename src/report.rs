use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ScrapeError;
use crate::record::JobRecord;

const RULE_WIDTH: usize = 70;

/// Paths of the two files written for a record.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

impl OutputPaths {
    pub fn for_job(dir: &Path, job_id: &str) -> Self {
        OutputPaths {
            text: dir.join(format!("job-{}.txt", job_id)),
            json: dir.join(format!("job-{}.json", job_id)),
        }
    }
}

/// Banner printed to the console after a successful scrape.
pub fn render_console(record: &JobRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{}\nJOB DETAILS\n{}\n", rule, rule));
    for (label, value) in [
        ("Title:", record.title.as_str()),
        ("Company:", record.company.as_str()),
        ("Location:", record.location.as_str()),
        ("Employment Type:", record.employment_type.as_str()),
        ("Seniority Level:", record.seniority_level.as_str()),
        ("Job ID:", record.job_id.as_str()),
        ("URL:", record.url.as_str()),
    ] {
        out.push_str(&format!("{:<17}{}\n", label, value));
    }
    out.push_str(&format!("{}\n\nJOB DESCRIPTION:\n\n{}\n\n{}", rule, record.description, rule));
    out
}

/// Fixed-layout body of `job-{id}.txt`.
pub fn render_text(record: &JobRecord) -> String {
    format!(
        "Title: {}\nCompany: {}\nLocation: {}\nEmployment Type: {}\nSeniority Level: {}\nURL: {}\n\nDESCRIPTION:\n{}",
        record.title,
        record.company,
        record.location,
        record.employment_type,
        record.seniority_level,
        record.url,
        record.description,
    )
}

/// Pretty JSON with two-space indentation.
pub fn render_json(record: &JobRecord) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Write the text file, then the JSON file. Not atomic across the pair.
pub fn write_outputs(record: &JobRecord, dir: &Path) -> Result<OutputPaths, ScrapeError> {
    let paths = OutputPaths::for_job(dir, record.job_id.as_str());

    write_file(&paths.text, &render_text(record))?;
    debug!("Job description saved to: {}", paths.text.display());

    let json = render_json(record)?;
    write_file(&paths.json, &json)?;
    debug!("JSON data saved to: {}", paths.json.display());

    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScrapeError> {
    fs::write(path, contents).map_err(|source| ScrapeError::Write { path: path.display().to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::PostingFields;
    use crate::input_resolver::resolve_job_id;

    fn record() -> JobRecord {
        JobRecord::new(
            resolve_job_id("4338745874").unwrap(),
            "https://www.linkedin.com/jobs/view/4338745874".into(),
            PostingFields {
                title: "Senior Backend Engineer".into(),
                company: "Acme Corp".into(),
                location: "Berlin, Germany".into(),
                description: "Build reliable services.".into(),
                employment_type: "Full-time".into(),
                seniority_level: "Mid-Senior level".into(),
            },
        )
    }

    #[test]
    fn test_text_layout() {
        let expected = "Title: Senior Backend Engineer\n\
                        Company: Acme Corp\n\
                        Location: Berlin, Germany\n\
                        Employment Type: Full-time\n\
                        Seniority Level: Mid-Senior level\n\
                        URL: https://www.linkedin.com/jobs/view/4338745874\n\
                        \n\
                        DESCRIPTION:\n\
                        Build reliable services.";
        assert_eq!(render_text(&record()), expected);
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let json = render_json(&record()).unwrap();
        assert!(json.starts_with("{\n  \"jobId\": \"4338745874\",\n  \"title\""));
    }

    #[test]
    fn test_console_labels_are_aligned() {
        let banner = render_console(&record());
        assert!(banner.contains("Title:           Senior Backend Engineer\n"));
        assert!(banner.contains("Seniority Level: Mid-Senior level\n"));
        assert!(banner.contains("Job ID:          4338745874\n"));
        assert!(banner.contains(&"=".repeat(70)));
    }

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::for_job(Path::new("out"), "12");
        assert_eq!(paths.text, Path::new("out").join("job-12.txt"));
        assert_eq!(paths.json, Path::new("out").join("job-12.json"));
    }
}
