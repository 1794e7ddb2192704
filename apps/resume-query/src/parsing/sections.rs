//! Section segmenter: walks lines, detects headers, and groups contiguous lines into
//! named sections.
//!
//! Detection is deliberately permissive. A short prose line that happens to contain a
//! header keyword ("Managed career development programs") opens a new section, exactly
//! like a real header would.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SectionMap, SectionName};

/// Lines at or above this length are never headers.
const MAX_HEADER_LINE_CHARS: usize = 100;
/// Stricter bound for the formatting-only header heuristic.
const MAX_HEURISTIC_HEADER_CHARS: usize = 50;

struct SectionPattern {
    name: SectionName,
    regex: Regex,
}

static SECTION_PATTERNS: LazyLock<Vec<SectionPattern>> = LazyLock::new(|| {
    [
        (SectionName::Contact, r"contact|personal|details|information"),
        (SectionName::Summary, r"summary|objective|profile|about"),
        (SectionName::Experience, r"experience|work\s*history|employment|career"),
        (SectionName::Education, r"education|academic|qualifications|degrees"),
        (SectionName::Skills, r"skills|competencies|expertise|technical\s*skills"),
        (SectionName::Projects, r"projects|portfolio|work\s*samples"),
        (SectionName::Certifications, r"certifications|licenses|accreditations"),
        (SectionName::Awards, r"awards|honors|achievements"),
        (SectionName::Languages, r"languages|language\s*skills"),
        (SectionName::Publications, r"publications|papers|research"),
    ]
    .into_iter()
    .map(|(name, pattern)| SectionPattern {
        name,
        regex: Regex::new(pattern).expect("valid section header regex"),
    })
    .collect()
});

static TITLE_CASE_COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]*(?:\s+[A-Z][a-z]*)*:$").expect("valid title-case header regex")
});

/// Splits multi-line text into a [`SectionMap`]. Lines before the first header belong to
/// `header`; each header line is kept as the first line of its own section.
pub fn split_into_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = SectionName::Header;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match identify_section(line) {
            Some(found) if found != current => {
                sections.append(current, buffer.join(" "));
                buffer.clear();
                current = found;
                buffer.push(line);
            }
            _ => buffer.push(line),
        }
    }
    sections.append(current, buffer.join(" "));

    sections
}

/// Classifies a line as a section header. Keyword groups take precedence; a line that
/// only looks like a header (caps, trailing colon) is filed under the first catalog
/// section, `contact`.
pub fn identify_section(line: &str) -> Option<SectionName> {
    if line.chars().count() >= MAX_HEADER_LINE_CHARS {
        return None;
    }
    let lower = line.to_lowercase();
    if let Some(pattern) = SECTION_PATTERNS.iter().find(|p| p.regex.is_match(&lower)) {
        return Some(pattern.name);
    }
    if looks_like_header(line) {
        return SECTION_PATTERNS.first().map(|p| p.name);
    }
    None
}

/// Formatting-only header heuristic: short and either fully upper-case, ending in a
/// colon, or Title Cased words followed by a colon.
pub fn looks_like_header(line: &str) -> bool {
    let line = line.trim();
    if line.chars().count() >= MAX_HEURISTIC_HEADER_CHARS {
        return false;
    }
    is_upper(line) || line.ends_with(':') || TITLE_CASE_COLON.is_match(line)
}

/// Upper-case in the sense of "has cased letters and none of them are lower-case".
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane@example.com\n\
        \n\
        PROFESSIONAL SUMMARY\n\
        Registered nurse with 8 years in acute care.\n\
        Work Experience\n\
        Charge Nurse, St. Mary Hospital 2018-present\n\
        Staff Nurse, City Clinic 2016-2018\n\
        Education\n\
        BSN, State University\n\
        Skills\n\
        Triage, Patient care, Epic";

    #[test]
    fn test_splits_common_sections() {
        let sections = split_into_sections(RESUME);
        assert_eq!(sections.get(SectionName::Header), Some("Jane Doe jane@example.com"));
        assert!(sections
            .get(SectionName::Summary)
            .unwrap()
            .starts_with("PROFESSIONAL SUMMARY"));
        assert!(sections
            .get(SectionName::Experience)
            .unwrap()
            .contains("Staff Nurse, City Clinic"));
        assert_eq!(
            sections.get(SectionName::Education),
            Some("Education BSN, State University")
        );
        assert_eq!(
            sections.get(SectionName::Skills),
            Some("Skills Triage, Patient care, Epic")
        );
    }

    #[test]
    fn test_absent_sections_are_missing() {
        let sections = split_into_sections(RESUME);
        assert!(!sections.contains(SectionName::Publications));
        assert!(!sections.contains(SectionName::Awards));
    }

    #[test]
    fn test_concatenation_reproduces_line_joined_text() {
        let sections = split_into_sections(RESUME);
        let rebuilt: Vec<&str> = sections.iter().map(|(_, content)| content).collect();
        let original: Vec<&str> = RESUME
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(rebuilt.join(" "), original.join(" "));
    }

    #[test]
    fn test_empty_text_yields_empty_map() {
        assert!(split_into_sections("").is_empty());
        assert!(split_into_sections("\n \n").is_empty());
    }

    #[test]
    fn test_keyword_groups_take_precedence_over_formatting() {
        assert_eq!(identify_section("EXPERIENCE"), Some(SectionName::Experience));
        assert_eq!(identify_section("Education:"), Some(SectionName::Education));
        assert_eq!(identify_section("Technical Skills"), Some(SectionName::Skills));
    }

    #[test]
    fn test_formatting_only_header_falls_back_to_contact() {
        assert_eq!(identify_section("JANE DOE"), Some(SectionName::Contact));
        assert_eq!(identify_section("Volunteering:"), Some(SectionName::Contact));
    }

    #[test]
    fn test_long_lines_are_never_headers() {
        let line = format!("Experience {}", "x".repeat(120));
        assert_eq!(identify_section(&line), None);
        assert_eq!(identify_section("Triage, Patient care, Epic"), None);
    }

    #[test]
    fn test_prose_with_keyword_opens_section() {
        // Accepted heuristic limitation: indistinguishable from a real header.
        assert_eq!(
            identify_section("Mentored juniors on career growth"),
            Some(SectionName::Experience)
        );
    }

    #[test]
    fn test_looks_like_header() {
        assert!(looks_like_header("CORE STRENGTHS"));
        assert!(looks_like_header("Core Strengths:"));
        assert!(!looks_like_header("Core strengths include triage"));
        assert!(!looks_like_header("2016 2018"));
    }

    #[test]
    fn test_repeated_section_appends() {
        let text = "Experience\nNurse\nEducation\nState University\nExperience\nVolunteer medic";
        let sections = split_into_sections(text);
        assert_eq!(
            sections.get(SectionName::Experience),
            Some("Experience Nurse Experience Volunteer medic")
        );
    }
}
