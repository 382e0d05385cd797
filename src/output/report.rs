//! Readiness report aggregating the engines' outputs for rendering

use crate::compliance::ComplianceVerdict;
use crate::matcher::{JobPosting, MatchResult};
use crate::roadmap::RoadmapAnalysis;
use serde::{Deserialize, Serialize};

/// One ranked catalog entry with enough context to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub score: u8,
}

impl RankedJob {
    pub fn from_result(result: &MatchResult, catalog: &[JobPosting]) -> Option<Self> {
        catalog.iter().find(|job| job.id == result.job_id).map(|job| Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            score: result.score,
        })
    }
}

/// Everything one `analyze`/`match` run produced, ready for a formatter.
/// Sections the run did not compute stay `None`/empty and are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub candidate_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub improvements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RoadmapAnalysis>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub matches: Vec<RankedJob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<ComplianceVerdict>,
}

impl ReadinessReport {
    pub fn new(candidate_skills: Vec<String>) -> Self {
        Self {
            candidate_skills,
            ..Self::default()
        }
    }

    pub fn with_analysis(mut self, analysis: RoadmapAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_resume_notes(mut self, summary: String, improvements: Vec<String>) -> Self {
        self.summary = Some(summary);
        self.improvements = improvements;
        self
    }

    pub fn with_matches(mut self, matches: Vec<RankedJob>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_verdict(mut self, verdict: ComplianceVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }
}
