//! Profile assembler: runs every extractor over one document and builds the profile.

use tracing::debug;

use crate::config::{Config, DEFAULT_REFERENCE_YEAR};
use crate::models::{SectionMap, StructuredProfile};
use crate::parsing::education::{classify_education_level, extract_education};
use crate::parsing::experience::estimate_experience_years;
use crate::parsing::highlights::{
    extract_achievements, extract_certifications, extract_languages,
};
use crate::parsing::normalize::normalize_lines;
use crate::parsing::profession::detect_profession;
use crate::parsing::roles::{extract_industries, extract_job_titles};
use crate::parsing::sections::split_into_sections;
use crate::parsing::skills::{
    extract_skills, extract_soft_skills, extract_technical_skills, extract_tools,
};
use crate::parsing::summary::synthesize_summary;

/// A document in the shapes the extractors read.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    /// Trimmed non-blank lines exactly as written. User-visible fields (summary,
    /// education institution) are cut from these.
    pub raw_lines: Vec<String>,
    /// Normalized non-blank lines, in order.
    pub lines: Vec<String>,
    /// All lines as one lowercased, single-spaced string.
    pub text_lower: String,
    pub sections: SectionMap,
}

impl ResumeDocument {
    pub fn from_raw(raw: &str) -> Self {
        let raw_lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        let lines = normalize_lines(raw);
        let text_lower = lines.join(" ").to_lowercase();
        let sections = split_into_sections(&lines.join("\n"));
        Self {
            raw_lines,
            lines,
            text_lower,
            sections,
        }
    }
}

/// Rule-based parser for resumes of any profession. Needs no external service and
/// never fails; every field falls back to its documented default.
#[derive(Debug, Clone, Copy)]
pub struct UniversalParser {
    reference_year: i32,
}

impl Default for UniversalParser {
    fn default() -> Self {
        Self::with_reference_year(DEFAULT_REFERENCE_YEAR)
    }
}

impl UniversalParser {
    pub fn new(config: &Config) -> Self {
        Self::with_reference_year(config.reference_year)
    }

    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn parse(&self, raw: &str) -> StructuredProfile {
        self.parse_document(&ResumeDocument::from_raw(raw))
    }

    pub fn parse_document(&self, doc: &ResumeDocument) -> StructuredProfile {
        let text = doc.text_lower.as_str();
        let lines = doc.lines.as_slice();
        let raw_lines = doc.raw_lines.as_slice();

        let profile = StructuredProfile {
            profession: detect_profession(text),
            experience_years: estimate_experience_years(text, self.reference_year),
            education: extract_education(raw_lines),
            skills: extract_skills(text, lines),
            technical_skills: extract_technical_skills(text),
            soft_skills: extract_soft_skills(text),
            tools_and_technologies: extract_tools(text),
            certifications: extract_certifications(lines),
            languages: extract_languages(text),
            key_achievements: extract_achievements(lines),
            job_titles: extract_job_titles(lines),
            industries: extract_industries(text),
            education_level: classify_education_level(text),
            summary: synthesize_summary(raw_lines),
        }
        .sanitized();

        debug!(
            profession = %profile.profession,
            experience_years = profile.experience_years,
            skills = profile.skills.len(),
            job_titles = profile.job_titles.len(),
            sections = doc.sections.len(),
            "Rule-based parse complete"
        );

        profile
    }
}
