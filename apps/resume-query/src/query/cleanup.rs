use std::sync::LazyLock;

use regex::Regex;

static BOOLEAN_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?:OR|AND)\s").expect("valid boolean operator regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strips search syntax from a query produced by an external service so it reads as
/// plain keywords. Returns an empty string when nothing usable is left.
pub fn clean_query(query: &str) -> String {
    let stripped: String = query
        .chars()
        .filter(|c| !matches!(c, '"' | '(' | ')' | '|'))
        .collect();
    // Run twice so adjacent operators ("a OR AND b") share no whitespace.
    let once = BOOLEAN_OPERATOR.replace_all(&stripped, " ");
    let twice = BOOLEAN_OPERATOR.replace_all(&once, " ");
    WHITESPACE_RUN.replace_all(&twice, " ").trim().to_string()
}
