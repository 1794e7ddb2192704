//! Rule-based resume parsing and job-search query synthesis.
//!
//! [`parsing::UniversalParser`] turns plain resume text into a
//! [`models::StructuredProfile`]; [`query::synthesize_query`] turns that profile into a
//! keyword query. [`analyzer::ResumeAnalyzer`] runs both, optionally behind an external
//! [`intelligence::ProfileIntelligence`] service with a deterministic fallback.

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod intelligence;
pub mod models;
pub mod parsing;
pub mod query;
