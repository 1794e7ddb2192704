//! Skill-family extractors: general skills, technical skills, soft skills, tools.

use std::collections::BTreeSet;

use crate::models::profile::{MAX_SKILLS, MAX_TECHNICAL_SKILLS};
use crate::parsing::catalog::{
    contains_any, contains_keyword, title_case, FIELD_SKILLS, INDUSTRY_TOOLS, OFFICE_TOOLS,
    SKILL_BLOCK_STOP_WORDS, SKILL_HEADER_CUES, SOFT_SKILLS, TECHNICAL_SKILLS, UNIVERSAL_SKILLS,
};

const SKILL_HEADER_MAX_CHARS: usize = 60;
const SKILL_LINE_MAX_CHARS: usize = 80;
/// How many lines after a skills header are read as free-form skills.
const SKILL_BLOCK_LINES: usize = 7;

/// Union of universal skills, field-gated skills, and free-form lines under a
/// skills-like header. Collected as a sorted set, then capped at 15.
pub fn extract_skills(text_lower: &str, lines: &[String]) -> Vec<String> {
    let mut skills = BTreeSet::new();

    for skill in UNIVERSAL_SKILLS {
        if contains_keyword(text_lower, skill) {
            skills.insert(title_case(skill));
        }
    }

    for (field, field_skills) in FIELD_SKILLS {
        if !contains_keyword(text_lower, field) {
            continue;
        }
        for skill in field_skills.iter() {
            if contains_keyword(text_lower, skill) {
                skills.insert(title_case(skill));
            }
        }
    }

    skills.extend(skill_block_lines(lines));

    skills.into_iter().take(MAX_SKILLS).collect()
}

/// Lines following a short line that announces skills ("Core Competencies",
/// "Technical Skills:"). Stops contributing lines that mention other sections.
fn skill_block_lines(lines: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if !contains_any(&lower, SKILL_HEADER_CUES)
            || line.trim().chars().count() >= SKILL_HEADER_MAX_CHARS
        {
            continue;
        }
        for candidate in lines.iter().skip(i + 1).take(SKILL_BLOCK_LINES) {
            let candidate = candidate.trim();
            if candidate.is_empty() || candidate.chars().count() >= SKILL_LINE_MAX_CHARS {
                continue;
            }
            if contains_any(&candidate.to_lowercase(), SKILL_BLOCK_STOP_WORDS) {
                continue;
            }
            found.push(candidate.to_string());
        }
    }
    found
}

/// Known software and systems named in the text, in catalog order, capped at 10.
pub fn extract_technical_skills(text_lower: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for skill in TECHNICAL_SKILLS {
        let display = title_case(skill);
        if contains_keyword(text_lower, skill) && !found.contains(&display) {
            found.push(display);
        }
    }
    found.truncate(MAX_TECHNICAL_SKILLS);
    found
}

pub fn extract_soft_skills(text_lower: &str) -> Vec<String> {
    SOFT_SKILLS
        .iter()
        .filter(|skill| contains_keyword(text_lower, skill))
        .map(|skill| title_case(skill))
        .collect()
}

/// Office tools anywhere, plus industry tools when the industry itself is named.
/// Not capped here; the query stage reads only the first few.
pub fn extract_tools(text_lower: &str) -> Vec<String> {
    let mut tools: Vec<String> = Vec::new();
    let mut push = |tool: &str| {
        let display = title_case(tool);
        if !tools.contains(&display) {
            tools.push(display);
        }
    };

    for tool in OFFICE_TOOLS {
        if contains_keyword(text_lower, tool) {
            push(*tool);
        }
    }
    for (industry, industry_tools) in INDUSTRY_TOOLS {
        if !contains_keyword(text_lower, industry) {
            continue;
        }
        for tool in industry_tools.iter() {
            if contains_keyword(text_lower, tool) {
                push(*tool);
            }
        }
    }
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_universal_skills_are_title_cased() {
        let skills = extract_skills("strong communication and problem solving", &[]);
        assert_eq!(skills, vec!["Communication", "Problem Solving"]);
    }

    #[test]
    fn test_field_skills_require_field_mention() {
        let gated = extract_skills("lesson planning and classroom management", &[]);
        assert!(gated.is_empty());

        let open = extract_skills(
            "k-12 education: lesson planning and classroom management",
            &[],
        );
        assert_eq!(open, vec!["Classroom Management", "Lesson Planning"]);
    }

    #[test]
    fn test_skill_block_lines_follow_header() {
        let doc = lines(
            "Core Competencies\n\
             Wound care\n\
             IV therapy\n\
             Work history at County Hospital\n\
             Phlebotomy",
        );
        let skills = extract_skills("", &doc);
        assert_eq!(skills, vec!["IV therapy", "Phlebotomy", "Wound care"]);
    }

    #[test]
    fn test_skill_block_stops_after_seven_lines() {
        let mut text = String::from("Skills");
        for i in 1..=9 {
            text.push_str(&format!("\nTool{i}"));
        }
        let skills = extract_skills("", &lines(&text));
        assert_eq!(skills.len(), 7);
        assert!(!skills.contains(&"Tool8".to_string()));
    }

    #[test]
    fn test_skills_capped_at_fifteen() {
        let mut text = String::from("Skills");
        for i in 0..10 {
            text.push_str(&format!("\nSkills group {i}"));
        }
        let skills = extract_skills("", &lines(&text));
        assert!(skills.len() <= MAX_SKILLS);
    }

    #[test]
    fn test_technical_skills_short_keywords() {
        let tech = extract_technical_skills("sap erp rollout, excel, epic ehr");
        assert_eq!(tech, vec!["Excel", "Sap", "Epic", "Ehr"]);
        assert!(extract_technical_skills("sapling and therapist").is_empty());
    }

    #[test]
    fn test_technical_skills_cap() {
        let text = "microsoft office excel word powerpoint outlook google workspace sheets docs \
                    slides quickbooks salesforce autocad revit";
        assert_eq!(extract_technical_skills(text).len(), MAX_TECHNICAL_SKILLS);
    }

    #[test]
    fn test_soft_skills() {
        let soft = extract_soft_skills("leadership, coaching and stakeholder management");
        assert_eq!(soft, vec!["Leadership", "Coaching", "Stakeholder Management"]);
    }

    #[test]
    fn test_tools_industry_gate() {
        assert_eq!(extract_tools("used slack and autocad"), vec!["Slack"]);
        assert_eq!(
            extract_tools("civil engineering, autocad and revit, jira"),
            vec!["Jira", "Autocad", "Revit"]
        );
    }

    #[test]
    fn test_tools_follow_catalog_order() {
        let tools = extract_tools("engineering and design with photoshop and autocad");
        assert_eq!(tools, vec!["Autocad", "Photoshop"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("", &[]).is_empty());
        assert!(extract_technical_skills("").is_empty());
        assert!(extract_soft_skills("").is_empty());
        assert!(extract_tools("").is_empty());
    }
}
