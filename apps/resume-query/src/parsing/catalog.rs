//! Static keyword tables used by the extractors, plus the shared keyword matcher.
//!
//! Tables are ordered: where an extractor breaks ties or stops at the first hit,
//! earlier entries win.
//!
//! Matching is substring-based, except that keywords of three characters or fewer
//! (`it`, `pe`, `ms`, `cpa`) must stand as whole words. This deliberately departs from
//! plain substring matching, which would find `it` in "with" and `pe` in "experience".

pub type Catalog = &'static [(&'static str, &'static [&'static str])];

/// Keywords this short only match as whole words, so `it` does not fire on "with"
/// and `pe` does not fire on "experience".
const SHORT_KEYWORD_MAX_LEN: usize = 3;

/// Whether `keyword` occurs in `haystack`. Both are expected lowercased.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    if keyword.len() > SHORT_KEYWORD_MAX_LEN {
        return haystack.contains(keyword);
    }
    haystack.match_indices(keyword).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(haystack, k))
}

/// Title-cases a catalog phrase for display: "problem solving" -> "Problem Solving".
/// A letter is upper-cased when it does not follow another letter.
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut prev_alpha = false;
    for c in phrase.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

pub fn count_matches(haystack: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|k| contains_keyword(haystack, k))
        .count()
}

pub const PROFESSION_CATEGORIES: Catalog = &[
    // Engineering & technical
    (
        "Civil Engineering",
        &["civil engineer", "structural engineer", "construction", "infrastructure", "cad technician", "site engineer"],
    ),
    (
        "Electrical Engineering",
        &["electrical engineer", "electronics engineer", "power systems", "circuit design", "embedded systems"],
    ),
    (
        "Mechanical Engineering",
        &["mechanical engineer", "manufacturing engineer", "cad designer", "solidworks", "thermodynamics"],
    ),
    (
        "Software Engineering",
        &["software engineer", "developer", "programmer", "full stack", "frontend", "backend"],
    ),
    // Healthcare
    (
        "Healthcare",
        &["registered nurse", "nurse practitioner", "medical doctor", "physician", "healthcare", "patient care"],
    ),
    ("Dentistry", &["dentist", "dental hygienist", "orthodontist", "dental assistant"]),
    ("Pharmacy", &["pharmacist", "pharmacy technician", "pharmaceutical"]),
    ("Therapy", &["physical therapist", "occupational therapist", "speech therapist"]),
    // Business & finance
    (
        "Finance",
        &["financial analyst", "accountant", "cpa", "investment banker", "wealth management"],
    ),
    ("Accounting", &["accountant", "auditor", "bookkeeper", "tax specialist"]),
    ("Banking", &["banker", "loan officer", "branch manager", "financial advisor"]),
    // Management & administration
    ("Management", &["project manager", "operations manager", "general manager", "team lead"]),
    ("HR", &["hr manager", "recruiter", "talent acquisition", "human resources"]),
    ("Administration", &["administrative assistant", "office manager", "executive assistant"]),
    // Education
    ("Education", &["teacher", "professor", "educator", "faculty", "instructor", "curriculum"]),
    ("Academic Research", &["researcher", "research assistant", "scientist", "postdoc"]),
    // Creative
    ("Design", &["graphic designer", "ux designer", "ui designer", "creative director"]),
    ("Marketing", &["marketing manager", "digital marketing", "brand manager", "seo specialist"]),
    ("Writing", &["writer", "content writer", "copywriter", "technical writer"]),
    // Sales & service
    (
        "Sales",
        &["sales representative", "account executive", "business development", "sales manager"],
    ),
    (
        "Customer Service",
        &["customer service", "client support", "help desk", "service representative"],
    ),
    ("Legal", &["lawyer", "attorney", "paralegal", "legal assistant", "counsel"]),
    // Skilled trades
    ("Construction Trades", &["carpenter", "electrician", "plumber", "welder", "contractor"]),
    ("Automotive", &["auto mechanic", "technician", "automotive engineer"]),
    // Science
    (
        "Science",
        &["biologist", "chemist", "physicist", "research scientist", "lab technician"],
    ),
];

pub const INDUSTRIES: Catalog = &[
    ("Technology", &["technology", "software", "it", "tech", "saas", "hardware"]),
    ("Finance", &["finance", "banking", "investment", "financial services", "insurance"]),
    ("Healthcare", &["healthcare", "medical", "hospital", "pharmaceutical", "biotech"]),
    ("Education", &["education", "academic", "school", "university", "learning"]),
    ("Manufacturing", &["manufacturing", "production", "industrial", "factory"]),
    ("Construction", &["construction", "building", "real estate", "property"]),
    ("Retail", &["retail", "e-commerce", "consumer goods", "merchandise"]),
    ("Consulting", &["consulting", "professional services", "advisory"]),
    ("Government", &["government", "public sector", "federal", "state", "municipal"]),
    ("Non-profit", &["non-profit", "nonprofit", "charity", "ngo"]),
    ("Hospitality", &["hospitality", "hotel", "restaurant", "tourism"]),
    ("Transportation", &["transportation", "logistics", "shipping", "supply chain"]),
    ("Energy", &["energy", "utilities", "oil", "gas", "renewable"]),
    ("Media", &["media", "entertainment", "publishing", "broadcast"]),
    ("Legal", &["legal", "law firm", "attorney", "courthouse"]),
];

pub const FIELDS_OF_STUDY: Catalog = &[
    (
        "Computer Science",
        &["computer science", "cs", "software engineering", "information technology"],
    ),
    (
        "Engineering",
        &["engineering", "mechanical", "electrical", "civil", "chemical", "aerospace"],
    ),
    ("Business", &["business", "business administration", "mba", "management", "marketing"]),
    ("Finance", &["finance", "accounting", "economics", "banking", "investment"]),
    ("Mathematics", &["mathematics", "math", "statistics", "applied math"]),
    ("Science", &["physics", "chemistry", "biology", "environmental science", "geology"]),
    ("Healthcare", &["medicine", "nursing", "pharmacy", "public health", "health sciences"]),
    ("Education", &["education", "teaching", "curriculum", "educational leadership"]),
    ("Arts", &["arts", "fine arts", "design", "music", "theater", "drama"]),
    ("Social Sciences", &["psychology", "sociology", "political science", "anthropology"]),
    ("Humanities", &["history", "english", "literature", "philosophy", "languages"]),
];

pub const DEFAULT_FIELD_OF_STUDY: &str = "General Studies";

pub const EDUCATION_LINE_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "school", "academy", "bachelor", "master", "phd",
    "doctorate", "mba", "degree", "diploma", "certificate", "graduated",
];

pub const UNIVERSAL_SKILLS: &[&str] = &[
    "project management", "team leadership", "communication", "problem solving",
    "analytical skills", "strategic planning", "budget management", "client relations",
    "research", "training", "mentoring", "quality assurance", "process improvement",
    "teamwork", "collaboration", "critical thinking", "time management", "organization",
    "public speaking", "presentation skills", "negotiation", "decision making",
];

/// Field-gated skills: a skill is only considered when the field name itself appears.
pub const FIELD_SKILLS: Catalog = &[
    ("engineering", &["cad design", "structural analysis", "circuit design", "system integration"]),
    ("healthcare", &["patient care", "medical terminology", "clinical skills", "health assessment"]),
    ("finance", &["financial analysis", "accounting", "budgeting", "financial reporting"]),
    (
        "education",
        &["curriculum development", "classroom management", "lesson planning", "student assessment"],
    ),
    ("sales", &["sales techniques", "client acquisition", "account management", "sales forecasting"]),
    ("design", &["design principles", "color theory", "typography", "layout design"]),
];

pub const SKILL_HEADER_CUES: &[&str] = &["skill", "competenc", "expertise", "proficient"];
/// Lines containing these end a free-form skills block.
pub const SKILL_BLOCK_STOP_WORDS: &[&str] = &["experience", "education", "work"];

pub const TECHNICAL_SKILLS: &[&str] = &[
    // office & business software
    "microsoft office", "excel", "word", "powerpoint", "outlook", "google workspace", "sheets",
    "docs", "slides", "quickbooks", "salesforce", "sap", "oracle",
    // engineering
    "autocad", "revit", "solidworks", "matlab", "ansys", "catia",
    // design
    "photoshop", "illustrator", "indesign", "figma", "sketch", "canva",
    // healthcare systems
    "epic", "cerner", "meditech", "ehr", "electronic health records",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "critical thinking",
    "adaptability", "time management", "creativity", "collaboration", "negotiation",
    "presentation", "public speaking", "interpersonal", "emotional intelligence",
    "conflict resolution", "decision making", "strategic thinking", "coaching", "mentoring",
    "customer service", "client management", "stakeholder management",
];

pub const OFFICE_TOOLS: &[&str] = &[
    "microsoft office", "google workspace", "slack", "teams", "zoom", "sharepoint", "onedrive",
    "dropbox", "asana", "trello", "jira",
];

/// Industry-gated tools: a tool is only considered when the industry name appears.
pub const INDUSTRY_TOOLS: Catalog = &[
    ("engineering", &["autocad", "revit", "solidworks", "matlab", "ansys", "arcgis"]),
    ("design", &["photoshop", "illustrator", "indesign", "figma", "sketch", "canva"]),
    ("healthcare", &["epic", "cerner", "meditech", "ehr", "pharmacy software"]),
    ("finance", &["quickbooks", "sage", "xero", "bloomberg", "reuters"]),
    ("education", &["blackboard", "canvas", "moodle", "learning management system"]),
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified", "certification", "license", "licensed", "accredited", "pmp", "cpa", "pe", "cpr",
    "aed", "first aid", "six sigma", "lean", "scrum", "agile", "aws certified",
    "google certified",
];

pub const LANGUAGES: &[&str] = &[
    "english", "spanish", "french", "german", "chinese", "hindi", "arabic", "portuguese",
    "russian", "japanese", "korean", "italian",
];

pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "achieved", "implemented", "led", "managed", "increased", "reduced", "improved", "developed",
    "created", "established", "launched", "won", "awarded", "recognized", "completed",
    "delivered",
];

pub const TITLE_INDICATORS: &[&str] = &[
    "manager", "director", "coordinator", "specialist", "analyst", "engineer", "consultant",
    "assistant", "associate", "officer", "supervisor", "lead", "head", "chief", "president",
    "vice president", "teacher", "instructor", "professor", "researcher", "scientist",
    "technician", "therapist", "nurse", "doctor", "dentist", "designer", "writer", "editor",
    "producer", "artist",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_keywords_match_as_substrings() {
        assert!(contains_keyword("senior software engineers", "software engineer"));
        assert!(contains_keyword("skilled leadership", "lead"));
    }

    #[test]
    fn test_short_keywords_need_word_boundaries() {
        assert!(!contains_keyword("worked with the team", "it"));
        assert!(!contains_keyword("10 years experience", "pe"));
        assert!(contains_keyword("it support desk", "it"));
        assert!(contains_keyword("licensed pe, ohio", "pe"));
        assert!(contains_keyword("ba (hons) history", "ba"));
    }

    #[test]
    fn test_short_keyword_with_dots() {
        assert!(contains_keyword("m.a. in history", "m.a"));
        assert!(!contains_keyword("sum.any", "m.a"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("problem solving"), "Problem Solving");
        assert_eq!(title_case("electronic health records"), "Electronic Health Records");
        assert_eq!(title_case("e-commerce"), "E-Commerce");
        assert_eq!(title_case("3d modeling"), "3D Modeling");
    }

    #[test]
    fn test_count_matches() {
        let text = "registered nurse providing patient care in healthcare";
        let healthcare = PROFESSION_CATEGORIES
            .iter()
            .find(|(name, _)| *name == "Healthcare")
            .map(|(_, kws)| *kws)
            .unwrap();
        assert_eq!(count_matches(text, healthcare), 3);
    }

    #[test]
    fn test_profession_catalog_is_broad() {
        assert!(PROFESSION_CATEGORIES.len() >= 25);
        assert_eq!(INDUSTRIES.len(), 15);
    }
}
