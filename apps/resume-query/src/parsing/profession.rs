use crate::models::profile::DEFAULT_PROFESSION;
use crate::parsing::catalog::{count_matches, PROFESSION_CATEGORIES};

/// Picks the profession category with the most distinct keyword hits in `text_lower`.
/// Ties go to the category defined first; no hits at all gives "Professional".
pub fn detect_profession(text_lower: &str) -> String {
    let mut best: Option<(&str, usize)> = None;

    for (profession, keywords) in PROFESSION_CATEGORIES {
        let score = count_matches(text_lower, keywords);
        if score == 0 {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((*profession, score));
        }
    }

    best.map(|(profession, _)| profession.to_string())
        .unwrap_or_else(|| DEFAULT_PROFESSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineer() {
        let text = "software engineer with 5 years experience in python django aws.";
        assert_eq!(detect_profession(text), "Software Engineering");
    }

    #[test]
    fn test_highest_score_wins() {
        let text = "registered nurse, patient care lead in a healthcare network. developer of training.";
        assert_eq!(detect_profession(text), "Healthcare");
    }

    #[test]
    fn test_tie_goes_to_first_defined_category() {
        // "accountant" scores 1 for both Finance and Accounting; Finance is defined first.
        assert_eq!(detect_profession("senior accountant"), "Finance");
    }

    #[test]
    fn test_no_match_defaults_to_professional() {
        assert_eq!(detect_profession(""), "Professional");
        assert_eq!(detect_profession("enjoys hiking and chess"), "Professional");
    }

    #[test]
    fn test_trades() {
        let text = "licensed electrician and welder, general contractor";
        assert_eq!(detect_profession(text), "Construction Trades");
    }
}
