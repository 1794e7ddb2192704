//! Profile intelligence: pluggable backends that turn resume text into a profile and a
//! profile into a job-search query.
//!
//! Default: `RuleBasedIntelligence` (pure Rust, deterministic, never fails).
//! An external service implements the same trait and is handed to `ResumeAnalyzer`
//! as an `Arc<dyn ProfileIntelligence>`; the analyzer owns the timeout and fallback.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::StructuredProfile;
use crate::parsing::UniversalParser;
use crate::query::synthesize_query;

pub const RULE_BASED_BACKEND: &str = "rule_based";

#[derive(Debug, Error)]
pub enum IntelligenceError {
    #[error("Service call timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Service returned an empty result")]
    EmptyResult,

    #[error("Service unavailable")]
    Unavailable,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the extraction or query backend without touching the
/// analyzer or the binary.
#[async_trait]
pub trait ProfileIntelligence: Send + Sync {
    /// Label recorded in analysis reports, e.g. `"rule_based"`.
    fn backend(&self) -> &'static str;

    async fn parse(&self, text: &str) -> Result<StructuredProfile, IntelligenceError>;

    async fn synthesize(&self, profile: &StructuredProfile) -> Result<String, IntelligenceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedIntelligence: deterministic default
// ────────────────────────────────────────────────────────────────────────────

/// Keyword heuristics and the offline query algorithm behind the common trait.
/// Both calls always return `Ok`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedIntelligence {
    parser: UniversalParser,
}

impl RuleBasedIntelligence {
    pub fn new(parser: UniversalParser) -> Self {
        Self { parser }
    }
}

#[async_trait]
impl ProfileIntelligence for RuleBasedIntelligence {
    fn backend(&self) -> &'static str {
        RULE_BASED_BACKEND
    }

    async fn parse(&self, text: &str) -> Result<StructuredProfile, IntelligenceError> {
        Ok(self.parser.parse(text))
    }

    async fn synthesize(&self, profile: &StructuredProfile) -> Result<String, IntelligenceError> {
        Ok(synthesize_query(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_rule_based_backend_never_fails() {
        let backend: Arc<dyn ProfileIntelligence> = Arc::new(RuleBasedIntelligence::default());
        assert_eq!(backend.backend(), "rule_based");

        let profile = backend.parse("").await.unwrap();
        assert_eq!(profile.profession, "Professional");
        assert!(profile.skills.is_empty());
        let query = backend.synthesize(&profile).await.unwrap();
        assert_eq!(query, "Entry-level Professional");
    }

    #[tokio::test]
    async fn test_rule_based_matches_parser() {
        let parser = UniversalParser::with_reference_year(2030);
        let backend = RuleBasedIntelligence::new(parser);
        let text = "Line Cook 2026-present\nPrepared 300 covers nightly";
        assert_eq!(backend.parse(text).await.unwrap(), parser.parse(text));
        assert_eq!(backend.parse(text).await.unwrap().experience_years, 4.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IntelligenceError::Timeout { secs: 30 }.to_string(),
            "Service call timed out after 30s"
        );
        assert_eq!(
            IntelligenceError::EmptyResult.to_string(),
            "Service returned an empty result"
        );
    }
}
