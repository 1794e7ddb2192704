use crate::models::profile::{truncate_with_ellipsis, MAX_SUMMARY_CHARS};

pub const GENERIC_SUMMARY: &str =
    "Experienced professional with demonstrated skills and accomplishments.";

/// Lines this short (names, dates, headers) are skipped when picking summary lines.
const MIN_SUMMARY_LINE_CHARS: usize = 15;

/// The first two substantial lines joined, cut to 200 characters, or a generic sentence.
pub fn synthesize_summary(lines: &[String]) -> String {
    let picked: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| line.chars().count() > MIN_SUMMARY_LINE_CHARS)
        .take(2)
        .collect();

    if picked.is_empty() {
        return GENERIC_SUMMARY.to_string();
    }
    truncate_with_ellipsis(&picked.join(" "), MAX_SUMMARY_CHARS)
}
