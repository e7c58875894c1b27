use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// Placeholder for a field no strategy could fill.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fields pulled out of a posting fragment. `description` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PostingFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub employment_type: String,
    pub seniority_level: String,
}

/// One way of reading a value out of the document.
enum Strategy {
    /// Text of every match, concatenated.
    AllText(Selector),
    /// Text of the first match.
    FirstText(Selector),
    /// Text of the match at `index`.
    NthText(Selector, usize),
    /// Text of every match, split on `separator`, segment `index`.
    Segment { selector: Selector, separator: char, index: usize },
    /// Inner HTML of the first match.
    FirstInnerHtml(Selector),
}

impl Strategy {
    fn apply(&self, doc: &Html) -> Option<String> {
        let value = match self {
            Strategy::AllText(sel) => doc.select(sel).map(element_text).collect::<String>(),
            Strategy::FirstText(sel) => element_text(doc.select(sel).next()?),
            Strategy::NthText(sel, index) => element_text(doc.select(sel).nth(*index)?),
            Strategy::Segment { selector, separator, index } => {
                let joined: String = doc.select(selector).map(element_text).collect();
                joined.split(*separator).nth(*index)?.to_string()
            }
            Strategy::FirstInnerHtml(sel) => doc.select(sel).next()?.inner_html(),
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Ordered strategies for one field; the first non-empty result wins.
struct FieldChain {
    name: &'static str,
    strategies: Vec<Strategy>,
}

impl FieldChain {
    fn first_match(&self, doc: &Html) -> Option<String> {
        self.strategies.iter().enumerate().find_map(|(i, strategy)| {
            let value = strategy.apply(doc)?;
            debug!("{}: matched strategy {}", self.name, i);
            Some(value)
        })
    }

    fn or_sentinel(&self, doc: &Html) -> String {
        self.first_match(doc).unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

pub struct Extractor {
    title: FieldChain,
    company: FieldChain,
    location: FieldChain,
    description: FieldChain,
    employment_type: FieldChain,
    seniority_level: FieldChain,
}

impl Extractor {
    pub fn new() -> Result<Self, ScrapeError> {
        let criteria = || sel(".description__job-criteria-text");

        Ok(Extractor {
            title: FieldChain {
                name: "title",
                strategies: vec![
                    Strategy::AllText(sel(".top-card-layout__title")?),
                    Strategy::FirstText(sel("h1")?),
                ],
            },
            company: FieldChain {
                name: "company",
                strategies: vec![
                    Strategy::FirstText(sel(".top-card-layout__second-subline a")?),
                    Strategy::AllText(sel(".topcard__org-name-link")?),
                ],
            },
            location: FieldChain {
                name: "location",
                strategies: vec![
                    Strategy::FirstText(sel(".topcard__flavor--bullet")?),
                    Strategy::Segment {
                        selector: sel(".top-card-layout__second-subline")?,
                        separator: '·',
                        index: 1,
                    },
                ],
            },
            description: FieldChain {
                name: "description",
                strategies: vec![
                    Strategy::FirstInnerHtml(sel(".show-more-less-html__markup")?),
                    Strategy::FirstInnerHtml(sel(".description__text")?),
                    Strategy::FirstInnerHtml(sel(r#"[class*="description"]"#)?),
                ],
            },
            employment_type: FieldChain {
                name: "employment_type",
                strategies: vec![Strategy::NthText(criteria()?, 0)],
            },
            seniority_level: FieldChain {
                name: "seniority_level",
                strategies: vec![Strategy::NthText(criteria()?, 1)],
            },
        })
    }

    /// Pure function of the markup: same HTML, same fields.
    pub fn extract(&self, html: &str) -> Result<PostingFields, ScrapeError> {
        let doc = Html::parse_document(html);

        let description_html = self.description.first_match(&doc).ok_or(ScrapeError::DescriptionMissing)?;
        let description = html_to_text(&description_html);
        if description.is_empty() {
            return Err(ScrapeError::DescriptionMissing);
        }

        Ok(PostingFields {
            title: self.title.or_sentinel(&doc),
            company: self.company.or_sentinel(&doc),
            location: self.location.or_sentinel(&doc),
            description,
            employment_type: self.employment_type.or_sentinel(&doc),
            seniority_level: self.seniority_level.or_sentinel(&doc),
        })
    }
}

fn sel(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector { css, reason: e.to_string() })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Parse an HTML snippet as its own fragment and reduce it to normalized text.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    normalize_whitespace(&text)
}

/// Trim, collapse whitespace runs to one space, collapse blank-line runs to one newline.
/// Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapse_blank_lines(&collapsed).trim().to_string()
}

fn collapse_blank_lines(text: &str) -> String {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect::<Vec<_>>().join("\n")
}
