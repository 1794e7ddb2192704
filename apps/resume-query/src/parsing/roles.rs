use crate::models::profile::MAX_JOB_TITLES;
use crate::parsing::catalog::{contains_any, INDUSTRIES, TITLE_INDICATORS};

const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 80;
/// Share of upper-case characters above which a line reads like a title.
const TITLE_UPPERCASE_RATIO: f64 = 0.3;

/// Lines that look like job titles: a title word (manager, nurse, ...) or, failing
/// that, title-cased or capital-heavy text. First ten distinct lines in document order.
pub fn extract_job_titles(lines: &[String]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();

    for line in lines {
        let line = line.trim();
        let len = line.chars().count();
        if len <= TITLE_MIN_CHARS || len >= TITLE_MAX_CHARS {
            continue;
        }
        let is_title = contains_any(&line.to_lowercase(), TITLE_INDICATORS)
            || is_title_case(line)
            || uppercase_ratio(line) > TITLE_UPPERCASE_RATIO;
        if is_title && !titles.iter().any(|t| t == line) {
            titles.push(line.to_string());
            if titles.len() == MAX_JOB_TITLES {
                break;
            }
        }
    }

    titles
}

/// Every industry with at least one keyword in `text_lower`, in catalog order.
pub fn extract_industries(text_lower: &str) -> Vec<String> {
    INDUSTRIES
        .iter()
        .filter(|(_, keywords)| contains_any(text_lower, keywords))
        .map(|(industry, _)| industry.to_string())
        .collect()
}

/// Title case as in "Senior Staff Nurse": every cased run starts upper-case and
/// continues lower-case, with at least one cased character.
fn is_title_case(line: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;
    for c in line.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

fn uppercase_ratio(line: &str) -> f64 {
    let total = line.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = line.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_title_indicator_lines() {
        let titles = extract_job_titles(&lines(
            "charge nurse at st. mary\nlooked after patients daily in a busy ward\nproject manager",
        ));
        assert_eq!(titles, vec!["charge nurse at st. mary", "project manager"]);
    }

    #[test]
    fn test_title_case_and_caps_heuristics() {
        let titles = extract_job_titles(&lines(
            "Landscape Gardener\nGIS AND CAD LEAD\nplanted trees for the council",
        ));
        assert_eq!(titles, vec!["Landscape Gardener", "GIS AND CAD LEAD"]);
    }

    #[test]
    fn test_length_bounds() {
        let long = format!("Manager {}", "x".repeat(90));
        let titles = extract_job_titles(&lines(&format!("Chef\n{long}")));
        assert!(titles.is_empty());
    }

    #[test]
    fn test_titles_are_distinct_and_capped() {
        let mut text = String::from("Staff Nurse\nStaff Nurse");
        for i in 0..15 {
            text.push_str(&format!("\nShift Supervisor {i}"));
        }
        let titles = extract_job_titles(&lines(&text));
        assert_eq!(titles.len(), MAX_JOB_TITLES);
        assert_eq!(titles[0], "Staff Nurse");
        assert_eq!(titles[1], "Shift Supervisor 0");
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Senior Staff Nurse"));
        assert!(is_title_case("Head Chef, 2019"));
        assert!(!is_title_case("Senior staff nurse"));
        assert!(!is_title_case("NASA Engineer"));
        assert!(!is_title_case("2019 - 2021"));
    }

    #[test]
    fn test_industries_in_catalog_order() {
        let industries = extract_industries("hospital logistics and software for the state");
        assert_eq!(
            industries,
            vec!["Technology", "Healthcare", "Government", "Transportation"]
        );
    }

    #[test]
    fn test_industry_short_keywords() {
        assert!(extract_industries("worked with clients").is_empty());
        assert_eq!(extract_industries("it support"), vec!["Technology"]);
    }
}
