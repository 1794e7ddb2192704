//! Text normalizer: strips characters outside the supported set and collapses whitespace.

use std::sync::LazyLock;

use regex::Regex;

static UNSUPPORTED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s.,!?;:()\-@]").expect("valid unsupported-char regex")
});
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes raw text into a single line: typographic dashes become `-`, characters
/// outside {word, whitespace, `.,!?;:()-@`} are removed, and whitespace runs collapse
/// to one space. Never fails; empty input yields an empty string.
pub fn normalize_text(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '\u{2012}' | '\u{2212}' => '-',
            other => other,
        })
        .collect();
    let stripped = UNSUPPORTED_CHARS.replace_all(&folded, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Normalizes each line independently and drops lines that end up blank.
/// Line boundaries are kept so section detection and line-based extractors still work.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(normalize_text)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize_text("  Senior \t\tNurse\n\nICU  "), "Senior Nurse ICU");
    }

    #[test]
    fn test_strips_unsupported_characters() {
        assert_eq!(
            normalize_text("• Python/Django — 5 yrs ★ (AWS) jane@mail.com"),
            "PythonDjango - 5 yrs (AWS) jane@mail.com"
        );
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let text = "Hello, world! Ready? Yes; see: (notes) - a@b.c";
        assert_eq!(normalize_text(text), text);
    }

    #[test]
    fn test_folds_en_dash_ranges() {
        assert_eq!(normalize_text("2015–2020"), "2015-2020");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(normalize_text("Zürich École"), "Zürich École");
    }

    #[test]
    fn test_normalize_lines_drops_blank_lines() {
        let lines = normalize_lines("EXPERIENCE\n   \n★★★\n  Staff Nurse  ");
        assert_eq!(lines, vec!["EXPERIENCE", "Staff Nurse"]);
    }
}
