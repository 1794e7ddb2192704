//! Experience-years estimator.
//!
//! Two independent signals, take the larger:
//! - explicit mentions ("5 years", "10+ yrs", "experience of 3 years"), maximum found;
//! - year ranges ("2015-2020", "2020-present"), summed. Overlapping ranges are
//!   counted twice; no overlap resolution is attempted.

use std::sync::LazyLock;

use regex::Regex;

static EXPLICIT_YEAR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\+?\s*years?",
        r"(\d+)\+?\s*yrs?",
        r"experience.*?(\d+)\+?\s*years?",
        r"(\d+)\+?\s*years?.*experience",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid explicit-years regex"))
    .collect()
});

static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})\s*[-–]\s*(\d{4}|present|current|now)").expect("valid year-range regex")
});

/// Estimates total years of experience from lowercased text. `reference_year` closes
/// open-ended ranges. Never negative; 0 when nothing is found.
pub fn estimate_experience_years(text_lower: &str, reference_year: i32) -> f64 {
    let explicit = max_explicit_years(text_lower);
    let ranged = summed_year_ranges(text_lower, reference_year);
    explicit.max(ranged).max(0.0)
}

/// Largest explicit "N years" style mention, or 0.
pub fn max_explicit_years(text_lower: &str) -> f64 {
    EXPLICIT_YEAR_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text_lower))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .filter(|years| years.is_finite())
        .fold(0.0, f64::max)
}

/// Sum of `end - start` over every year range found, or 0 when the sum is not positive.
pub fn summed_year_ranges(text_lower: &str, reference_year: i32) -> f64 {
    let total: i64 = YEAR_RANGE
        .captures_iter(text_lower)
        .filter_map(|caps| {
            let start: i64 = caps.get(1)?.as_str().parse().ok()?;
            let end: i64 = match caps.get(2)?.as_str() {
                "present" | "current" | "now" => i64::from(reference_year),
                year => year.parse().ok()?,
            };
            Some(end - start)
        })
        .sum();

    if total > 0 {
        total as f64
    } else {
        0.0
    }
}
