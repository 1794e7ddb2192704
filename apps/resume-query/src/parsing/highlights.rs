use crate::models::profile::{MAX_ACHIEVEMENTS, MAX_CERTIFICATIONS};
use crate::parsing::catalog::{
    contains_any, contains_keyword, title_case, ACHIEVEMENT_VERBS, CERTIFICATION_KEYWORDS,
    LANGUAGES,
};

const CERTIFICATION_MAX_CHARS: usize = 100;
const ACHIEVEMENT_MIN_CHARS: usize = 15;
const ACHIEVEMENT_MAX_CHARS: usize = 250;

/// Short lines naming a certification or license, first five distinct in document order.
pub fn extract_certifications(lines: &[String]) -> Vec<String> {
    let mut certs: Vec<String> = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.chars().count() >= CERTIFICATION_MAX_CHARS {
            continue;
        }
        if contains_any(&line.to_lowercase(), CERTIFICATION_KEYWORDS)
            && !certs.iter().any(|c| c == line)
        {
            certs.push(line.to_string());
            if certs.len() == MAX_CERTIFICATIONS {
                break;
            }
        }
    }
    certs
}

pub fn extract_languages(text_lower: &str) -> Vec<String> {
    LANGUAGES
        .iter()
        .filter(|lang| contains_keyword(text_lower, lang))
        .map(|lang| title_case(lang))
        .collect()
}

/// Lines with an accomplishment verb and a plausible bullet length, first five by
/// appearance.
pub fn extract_achievements(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| {
            let len = line.chars().count();
            len > ACHIEVEMENT_MIN_CHARS && len < ACHIEVEMENT_MAX_CHARS
        })
        .filter(|line| contains_any(&line.to_lowercase(), ACHIEVEMENT_VERBS))
        .take(MAX_ACHIEVEMENTS)
        .map(String::from)
        .collect()
}
