use std::sync::LazyLock;

use regex::Regex;

use crate::models::profile::MAX_EDUCATION_ENTRIES;
use crate::models::{EducationEntry, EducationLevel};
use crate::parsing::catalog::{
    contains_any, DEFAULT_FIELD_OF_STUDY, EDUCATION_LINE_KEYWORDS, FIELDS_OF_STUDY,
};

/// Degree patterns in precedence order; the first match classifies the line.
/// `masters?` and friends also cover "Master's" once the apostrophe is stripped.
static DEGREE_PATTERNS: LazyLock<Vec<(EducationLevel, Regex)>> = LazyLock::new(|| {
    [
        (EducationLevel::Phd, r"\b(phd|doctorate)\b"),
        (EducationLevel::Masters, r"\b(masters?|ms|m\.s|mba|m\.a|m\.sc)\b"),
        (EducationLevel::Bachelors, r"\b(bachelors?|bs|b\.s|ba|b\.a|bsc|b\.sc)\b"),
        (EducationLevel::Associates, r"\b(associates?|a\.a|a\.s)\b"),
        (EducationLevel::Diploma, r"\b(diploma)\b"),
        (EducationLevel::Certificate, r"\b(certificate)\b"),
    ]
    .into_iter()
    .map(|(level, p)| (level, Regex::new(p).expect("valid degree regex")))
    .collect()
});

/// Document-wide cascade for the highest education level, most advanced first.
const LEVEL_CASCADE: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctorate"]),
    (EducationLevel::Masters, &["master", "ms", "mba", "m.a"]),
    (EducationLevel::Bachelors, &["bachelor", "bs", "ba", "b.a"]),
    (EducationLevel::Associates, &["associate", "a.a", "a.s"]),
    (EducationLevel::Diploma, &["diploma"]),
    (EducationLevel::Certificate, &["certificate"]),
];

/// Finds up to three education entries, in document order. Each line mentioning a
/// school or degree becomes one entry; the line itself is kept as the institution, so
/// callers pass raw (trimmed) lines to keep punctuation such as `Master's` intact.
pub fn extract_education(lines: &[String]) -> Vec<EducationEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let lower = line.to_lowercase();
            if !contains_any(&lower, EDUCATION_LINE_KEYWORDS) {
                return None;
            }
            Some(EducationEntry {
                degree: classify_degree(&lower),
                field_of_study: classify_field_of_study(&lower).to_string(),
                institution: line.trim().to_string(),
            })
        })
        .take(MAX_EDUCATION_ENTRIES)
        .collect()
}

pub fn classify_degree(line_lower: &str) -> EducationLevel {
    DEGREE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line_lower))
        .map(|(level, _)| *level)
        .unwrap_or(EducationLevel::Unknown)
}

pub fn classify_field_of_study(line_lower: &str) -> &'static str {
    FIELDS_OF_STUDY
        .iter()
        .find(|(_, keywords)| contains_any(line_lower, keywords))
        .map(|(field, _)| *field)
        .unwrap_or(DEFAULT_FIELD_OF_STUDY)
}

/// Highest education level mentioned anywhere in `text_lower`.
pub fn classify_education_level(text_lower: &str) -> EducationLevel {
    LEVEL_CASCADE
        .iter()
        .find(|(_, keywords)| contains_any(text_lower, keywords))
        .map(|(level, _)| *level)
        .unwrap_or(EducationLevel::Unknown)
}
