//! Offline query synthesizer: turns a profile into a plain-text job-search query.
//!
//! Algorithm:
//! 1. Effective experience: the stated years, or a weak estimate from job titles and
//!    achievements when the stated value is 0.
//! 2. Tier: >=5 Senior, >=2 (none), >=1 Junior, otherwise Entry-level.
//! 3. Tokens: "<tier> <profession>", first short job title, up to three skills
//!    (technical, then general, then tools), first industry not already in the
//!    profession, and the education level for candidates under one year.
//! 4. De-duplicate, drop tokens of two characters or fewer, join with spaces.

use serde::{Deserialize, Serialize};

use crate::models::StructuredProfile;

const FELLOWSHIP_YEARS: f64 = 0.5;
const INTERNSHIP_YEARS: f64 = 0.3;
const GENERAL_ROLE_YEARS: f64 = 0.5;
const PROJECT_YEARS: f64 = 0.3;
const MIN_PROJECT_ACHIEVEMENTS: usize = 2;

const EMPLOYMENT_INDICATORS: &[&str] = &[
    "intern", "fellow", "trainee", "assistant", "associate", "worked", "employed", "position",
    "role",
];
const PROJECT_VERBS: &[&str] = &["developed", "managed", "led", "created", "implemented"];

// How much of each profile list the query stage reads.
const MAX_QUERY_TECHNICAL_SKILLS: usize = 4;
const MAX_QUERY_SKILLS: usize = 3;
const MAX_QUERY_TOOLS: usize = 2;
const MAX_QUERY_SKILL_TOKENS: usize = 3;
const MAX_TITLE_WORDS: usize = 4;
const MIN_TOKEN_CHARS: usize = 3;

// Slice of the profile handed to an external query service.
const SERVICE_TOOLS: usize = 8;
const SERVICE_TECHNICAL_SKILLS: usize = 10;
const SERVICE_SKILLS: usize = 8;
const SERVICE_JOB_TITLES: usize = 5;
const SERVICE_INDUSTRIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceTier {
    #[serde(rename = "Entry-level")]
    EntryLevel,
    Junior,
    /// Two to five years: no qualifier is added to the query.
    Mid,
    Senior,
}

impl ExperienceTier {
    pub fn from_years(years: f64) -> Self {
        if years >= 5.0 {
            ExperienceTier::Senior
        } else if years >= 2.0 {
            ExperienceTier::Mid
        } else if years >= 1.0 {
            ExperienceTier::Junior
        } else {
            ExperienceTier::EntryLevel
        }
    }

    /// The word prefixed to the profession; empty for mid-level.
    pub fn qualifier(&self) -> &'static str {
        match self {
            ExperienceTier::EntryLevel => "Entry-level",
            ExperienceTier::Junior => "Junior",
            ExperienceTier::Mid => "",
            ExperienceTier::Senior => "Senior",
        }
    }
}

/// Intermediate form of a query before rendering. Lives only for one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    pub effective_experience: f64,
    pub tier: ExperienceTier,
    pub tokens: Vec<String>,
}

impl QueryPlan {
    pub fn for_profile(profile: &StructuredProfile) -> Self {
        let effective_experience = effective_experience(profile);
        let tier = ExperienceTier::from_years(effective_experience);
        let mut tokens = Vec::new();

        let profession = profile.profession.trim();
        tokens.push(match tier.qualifier() {
            "" => profession.to_string(),
            qualifier => format!("{qualifier} {profession}"),
        });

        if let Some(title) = profile.job_titles.first() {
            if title.split_whitespace().count() <= MAX_TITLE_WORDS {
                tokens.push(title.clone());
            }
        }

        tokens.extend(
            profile
                .technical_skills
                .iter()
                .take(MAX_QUERY_TECHNICAL_SKILLS)
                .chain(profile.skills.iter().take(MAX_QUERY_SKILLS))
                .chain(profile.tools_and_technologies.iter().take(MAX_QUERY_TOOLS))
                .take(MAX_QUERY_SKILL_TOKENS)
                .cloned(),
        );

        if let Some(industry) = profile.industries.first() {
            if !profession
                .to_lowercase()
                .contains(&industry.to_lowercase())
            {
                tokens.push(industry.clone());
            }
        }

        if effective_experience < 1.0 && profile.education_level.is_known() {
            tokens.push(profile.education_level.to_string());
        }

        Self {
            effective_experience,
            tier,
            tokens,
        }
    }

    /// De-duplicates tokens (first occurrence wins), drops tokens too short to be
    /// useful, and joins the rest with single spaces.
    pub fn render(&self) -> String {
        let mut kept: Vec<&str> = Vec::new();
        for token in &self.tokens {
            let token = token.trim();
            if token.chars().count() < MIN_TOKEN_CHARS || kept.contains(&token) {
                continue;
            }
            kept.push(token);
        }
        kept.join(" ")
    }
}

/// Builds the job-search query for a profile without any external service.
pub fn synthesize_query(profile: &StructuredProfile) -> String {
    QueryPlan::for_profile(profile).render()
}

/// Copy of `profile` with the lists an external query service reads trimmed to their
/// leading entries.
pub fn query_input(profile: &StructuredProfile) -> StructuredProfile {
    let head = |items: &[String], n: usize| items.iter().take(n).cloned().collect::<Vec<_>>();
    StructuredProfile {
        tools_and_technologies: head(&profile.tools_and_technologies, SERVICE_TOOLS),
        technical_skills: head(&profile.technical_skills, SERVICE_TECHNICAL_SKILLS),
        skills: head(&profile.skills, SERVICE_SKILLS),
        job_titles: head(&profile.job_titles, SERVICE_JOB_TITLES),
        industries: head(&profile.industries, SERVICE_INDUSTRIES),
        ..profile.clone()
    }
}

/// Stated experience, or a weak estimate from titles and achievements when it is 0.
pub fn effective_experience(profile: &StructuredProfile) -> f64 {
    if profile.experience_years != 0.0 {
        return profile.experience_years.max(0.0);
    }

    let titles: Vec<String> = profile.job_titles.iter().map(|t| t.to_lowercase()).collect();
    if titles.iter().any(|t| t.contains("fellow")) {
        return FELLOWSHIP_YEARS;
    }
    if titles.iter().any(|t| t.contains("intern")) {
        return INTERNSHIP_YEARS;
    }
    if titles
        .iter()
        .any(|t| EMPLOYMENT_INDICATORS.iter().any(|i| t.contains(i)))
    {
        return GENERAL_ROLE_YEARS;
    }

    let project_count = profile
        .key_achievements
        .iter()
        .map(|a| a.to_lowercase())
        .filter(|a| PROJECT_VERBS.iter().any(|v| a.contains(v)))
        .count();
    if project_count >= MIN_PROJECT_ACHIEVEMENTS {
        return PROJECT_YEARS;
    }

    0.0
}
