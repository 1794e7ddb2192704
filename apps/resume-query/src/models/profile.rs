use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFESSION: &str = "Professional";
pub const MAX_SUMMARY_CHARS: usize = 200;

pub const MAX_EDUCATION_ENTRIES: usize = 3;
pub const MAX_SKILLS: usize = 15;
pub const MAX_TECHNICAL_SKILLS: usize = 10;
pub const MAX_JOB_TITLES: usize = 10;
pub const MAX_CERTIFICATIONS: usize = 5;
pub const MAX_ACHIEVEMENTS: usize = 5;

/// Highest education level, ordered by cascade precedence (PhD first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Associate's")]
    Associates,
    Diploma,
    Certificate,
    #[default]
    Unknown,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Phd => "PhD",
            EducationLevel::Masters => "Master's",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Associates => "Associate's",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Certificate => "Certificate",
            EducationLevel::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != EducationLevel::Unknown
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: EducationLevel,
    pub field_of_study: String,
    /// The raw line the entry was detected on.
    pub institution: String,
}

/// Structured career data for one document. Built fresh per request, never mutated
/// after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredProfile {
    pub profession: String,
    pub experience_years: f64,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools_and_technologies: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub key_achievements: Vec<String>,
    pub job_titles: Vec<String>,
    pub industries: Vec<String>,
    pub education_level: EducationLevel,
    pub summary: String,
}

impl Default for StructuredProfile {
    fn default() -> Self {
        Self {
            profession: DEFAULT_PROFESSION.to_string(),
            experience_years: 0.0,
            education: vec![],
            skills: vec![],
            technical_skills: vec![],
            soft_skills: vec![],
            tools_and_technologies: vec![],
            certifications: vec![],
            languages: vec![],
            key_achievements: vec![],
            job_titles: vec![],
            industries: vec![],
            education_level: EducationLevel::Unknown,
            summary: String::new(),
        }
    }
}

impl StructuredProfile {
    /// Re-applies the record invariants: de-duplicated lists, caps, a non-empty
    /// profession, non-negative experience and a bounded summary.
    ///
    /// Profiles coming back from an external service go through this too, so the
    /// invariants hold regardless of which backend produced the record.
    pub fn sanitized(self) -> Self {
        let profession = match self.profession.trim() {
            "" => DEFAULT_PROFESSION.to_string(),
            p => p.to_string(),
        };
        let experience_years = if self.experience_years.is_finite() {
            self.experience_years.max(0.0)
        } else {
            0.0
        };

        let mut education = Vec::new();
        for entry in self.education {
            if !education.contains(&entry) {
                education.push(entry);
            }
        }
        education.truncate(MAX_EDUCATION_ENTRIES);

        Self {
            profession,
            experience_years,
            education,
            skills: dedup_capped(self.skills, Some(MAX_SKILLS)),
            technical_skills: dedup_capped(self.technical_skills, Some(MAX_TECHNICAL_SKILLS)),
            soft_skills: dedup_capped(self.soft_skills, None),
            tools_and_technologies: dedup_capped(self.tools_and_technologies, None),
            certifications: dedup_capped(self.certifications, Some(MAX_CERTIFICATIONS)),
            languages: dedup_capped(self.languages, None),
            key_achievements: dedup_capped(self.key_achievements, Some(MAX_ACHIEVEMENTS)),
            job_titles: dedup_capped(self.job_titles, Some(MAX_JOB_TITLES)),
            industries: dedup_capped(self.industries, None),
            education_level: self.education_level,
            summary: truncate_with_ellipsis(&self.summary, MAX_SUMMARY_CHARS),
        }
    }

    /// Whether the profile carries enough signal to be worth using over a rule-based parse.
    pub fn has_substance(&self) -> bool {
        self.experience_years > 0.0 || !self.skills.is_empty() || !self.job_titles.is_empty()
    }
}

/// Case-sensitive de-duplication keeping first occurrences, then an optional cap.
/// Empty strings are dropped.
pub fn dedup_capped(items: Vec<String>, cap: Option<usize>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    if let Some(cap) = cap {
        out.truncate(cap);
    }
    out
}

/// Cuts `text` to `max_chars` characters, ending with `...` when it had to cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_uses_documented_defaults() {
        let profile = StructuredProfile::default();
        assert_eq!(profile.profession, "Professional");
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.education_level, EducationLevel::Unknown);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_education_level_serde_names() {
        let json = serde_json::to_string(&EducationLevel::Masters).unwrap();
        assert_eq!(json, r#""Master's""#);
        let level: EducationLevel = serde_json::from_str(r#""PhD""#).unwrap();
        assert_eq!(level, EducationLevel::Phd);
    }

    #[test]
    fn test_dedup_is_case_sensitive_and_ordered() {
        let items = vec![
            "Excel".to_string(),
            "excel".to_string(),
            "Excel".to_string(),
            String::new(),
            "Word".to_string(),
        ];
        assert_eq!(dedup_capped(items, None), vec!["Excel", "excel", "Word"]);
    }

    #[test]
    fn test_dedup_applies_cap_after_dedup() {
        let items: Vec<String> = ["a", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedup_capped(items, Some(2)), vec!["a", "b"]);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        let long = "x".repeat(250);
        let cut = truncate_with_ellipsis(&long, 200);
        assert_eq!(cut.chars().count(), 200);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_with_ellipsis("short", 200), "short");
    }

    #[test]
    fn test_sanitized_enforces_caps_and_floor() {
        let profile = StructuredProfile {
            profession: "  ".to_string(),
            experience_years: -3.0,
            certifications: (0..9).map(|i| format!("Cert {i}")).collect(),
            summary: "y".repeat(400),
            ..StructuredProfile::default()
        }
        .sanitized();

        assert_eq!(profile.profession, "Professional");
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.certifications.len(), MAX_CERTIFICATIONS);
        assert_eq!(profile.summary.chars().count(), MAX_SUMMARY_CHARS);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let profile: StructuredProfile =
            serde_json::from_str(r#"{"profession": "Nursing", "skills": ["Triage"]}"#).unwrap();
        assert_eq!(profile.profession, "Nursing");
        assert_eq!(profile.skills, vec!["Triage"]);
        assert_eq!(profile.education_level, EducationLevel::Unknown);
        assert!(profile.has_substance());
    }

    #[test]
    fn test_has_substance_requires_signal() {
        assert!(!StructuredProfile::default().has_substance());
        let profile = StructuredProfile {
            experience_years: 0.5,
            ..StructuredProfile::default()
        };
        assert!(profile.has_substance());
    }
}
