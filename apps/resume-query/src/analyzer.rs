//! Resume analysis pipeline: profile extraction plus query synthesis, with an optional
//! external service in front of the rule-based path.
//!
//! Every service call runs under `Config::service_timeout`. Any failure (timeout,
//! transport error, malformed or hollow result) is logged and replaced by the
//! deterministic result, so `analyze` itself never fails.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::intelligence::{IntelligenceError, ProfileIntelligence, RULE_BASED_BACKEND};
use crate::models::{SectionMap, StructuredProfile};
use crate::parsing::{ResumeDocument, UniversalParser};
use crate::query::{clean_query, query_input, synthesize_query};

/// Output of one analysis. `sections` is `None` when the caller asked to omit it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<SectionMap>,
    pub profile: StructuredProfile,
    pub job_query: String,
    pub profile_backend: String, // "rule_based" | service label
    pub query_backend: String,
}

impl AnalysisReport {
    pub fn to_json(&self, pretty: bool) -> Result<String, AppError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

pub struct ResumeAnalyzer {
    parser: UniversalParser,
    service: Option<Arc<dyn ProfileIntelligence>>,
    timeout: Duration,
}

impl ResumeAnalyzer {
    /// Rule-based analyzer; no external service is consulted.
    pub fn new(config: &Config) -> Self {
        Self {
            parser: UniversalParser::new(config),
            service: None,
            timeout: config.service_timeout,
        }
    }

    /// Consults `service` first for both the profile and the query.
    pub fn with_service(mut self, service: Arc<dyn ProfileIntelligence>) -> Self {
        self.service = Some(service);
        self
    }

    pub async fn analyze(&self, text: &str) -> AnalysisReport {
        let analysis_id = Uuid::new_v4();
        let doc = ResumeDocument::from_raw(text);

        let (profile, profile_backend) = match &self.service {
            Some(service) => match self.service_profile(service.as_ref(), text).await {
                Ok(profile) => (profile, service.backend()),
                Err(e) => {
                    warn!(
                        analysis_id = %analysis_id,
                        backend = service.backend(),
                        error = %e,
                        "Service profile rejected, using rule-based parser"
                    );
                    (self.parser.parse_document(&doc), RULE_BASED_BACKEND)
                }
            },
            None => (self.parser.parse_document(&doc), RULE_BASED_BACKEND),
        };

        let (job_query, query_backend) = match &self.service {
            Some(service) => match self.service_query(service.as_ref(), &profile).await {
                Ok(query) => (query, service.backend()),
                Err(e) => {
                    warn!(
                        analysis_id = %analysis_id,
                        backend = service.backend(),
                        error = %e,
                        "Service query rejected, using rule-based synthesizer"
                    );
                    (synthesize_query(&profile), RULE_BASED_BACKEND)
                }
            },
            None => (synthesize_query(&profile), RULE_BASED_BACKEND),
        };

        info!(
            analysis_id = %analysis_id,
            profession = %profile.profession,
            profile_backend,
            query_backend,
            "Analysis complete"
        );

        AnalysisReport {
            analysis_id,
            generated_at: Utc::now(),
            sections: Some(doc.sections),
            profile,
            job_query,
            profile_backend: profile_backend.to_string(),
            query_backend: query_backend.to_string(),
        }
    }

    async fn service_profile(
        &self,
        service: &dyn ProfileIntelligence,
        text: &str,
    ) -> Result<StructuredProfile, IntelligenceError> {
        let profile = tokio::time::timeout(self.timeout, service.parse(text))
            .await
            .map_err(|_| self.timed_out())??;

        if !profile.has_substance() {
            return Err(IntelligenceError::EmptyResult);
        }
        Ok(profile.sanitized())
    }

    async fn service_query(
        &self,
        service: &dyn ProfileIntelligence,
        profile: &StructuredProfile,
    ) -> Result<String, IntelligenceError> {
        let input = query_input(profile);
        let raw = tokio::time::timeout(self.timeout, service.synthesize(&input))
            .await
            .map_err(|_| self.timed_out())??;

        let query = clean_query(&raw);
        if query.is_empty() {
            return Err(IntelligenceError::MalformedResponse(format!(
                "query {raw:?} is empty after cleanup"
            )));
        }
        Ok(query)
    }

    fn timed_out(&self) -> IntelligenceError {
        IntelligenceError::Timeout {
            secs: self.timeout.as_secs(),
        }
    }
}
