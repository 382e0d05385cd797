//! Engine orchestration: resume analysis, ranking, and dashboard checks
//!
//! Ties the extractor, generator, matcher, and compliance policy to one
//! profile store. Two guarantees live here:
//!
//! - analysis supersession: results apply last-write-wins by *submission*
//!   order, so an out-of-order completion can never overwrite a newer one;
//! - update ordering: a new roadmap is fully persisted before any job
//!   scores can be recomputed against the updated skill set.

use crate::compliance::{CompliancePolicy, PromptState, SessionOutcome};
use crate::config::Config;
use crate::error::{CareerReadinessError, Result};
use crate::extract::SkillExtractor;
use crate::matcher::{JobPosting, MatchResult, SkillMatcher};
use crate::profile::{ProfileRecord, ProfileStore, ResumeProfile};
use crate::roadmap::{RoadmapAnalysis, RoadmapGenerator};
use crate::skills::SkillSet;
use chrono::{DateTime, Utc};
use log::{info, warn};

pub struct CareerEngine<S: ProfileStore> {
    extractor: SkillExtractor,
    generator: RoadmapGenerator,
    matcher: SkillMatcher,
    policy: CompliancePolicy,
    store: S,
    benchmark: SkillSet,
    submissions: u64,
    applied: u64,
}

impl<S: ProfileStore> CareerEngine<S> {
    pub fn new(config: &Config, store: S) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
            generator: RoadmapGenerator::new(config),
            matcher: SkillMatcher::new(),
            policy: CompliancePolicy::new(config),
            store,
            benchmark: RoadmapGenerator::default_benchmark(),
            submissions: 0,
            applied: 0,
        })
    }

    pub fn with_benchmark(mut self, benchmark: SkillSet) -> Self {
        self.benchmark = benchmark;
        self
    }

    /// Hand out a submission token for a resume analysis. Tokens are
    /// monotonically increasing; the token order, not arrival order, decides
    /// which result wins.
    pub fn begin_analysis(&mut self) -> u64 {
        self.submissions += 1;
        self.submissions
    }

    /// Extract skills from resume text and apply the result under the given
    /// submission token.
    pub fn analyze_resume(
        &mut self,
        key: &str,
        submission: u64,
        resume_text: &str,
    ) -> Result<Option<RoadmapAnalysis>> {
        let profile = self.extractor.analyze(resume_text, &self.benchmark);
        self.apply_analysis(key, submission, Ok(profile))
    }

    /// Apply the outcome of a resume analysis.
    ///
    /// Returns `Ok(None)` when the result is stale (superseded by a newer
    /// submission) — the caller simply drops it. A failed analysis surfaces
    /// as a retryable error and leaves the stored record untouched.
    pub fn apply_analysis(
        &mut self,
        key: &str,
        submission: u64,
        outcome: std::result::Result<ResumeProfile, String>,
    ) -> Result<Option<RoadmapAnalysis>> {
        if submission <= self.applied {
            warn!(
                "discarding stale analysis result (submission {}, latest applied {})",
                submission, self.applied
            );
            return Ok(None);
        }

        let profile = outcome.map_err(CareerReadinessError::AnalysisFailed)?;

        let mut record = self.store.get(key)?.unwrap_or_default();

        // Merge newly extracted skills into anything the user added manually
        let mut candidate = record.skill_set();
        for skill in profile.extracted_skills.iter() {
            candidate.insert(skill);
        }

        let analysis = self.generator.generate(&candidate, &self.benchmark);
        record.skills = candidate.to_vec();
        record.ai_analysis = Some(analysis.clone());

        // Persist before anything can recompute scores against the new skills
        self.store.put(key, &record)?;
        self.applied = submission;
        info!(
            "applied analysis for {} (submission {}): {} skills, trending {}",
            key,
            submission,
            record.skills.len(),
            analysis.trending_score
        );

        Ok(Some(analysis))
    }

    /// Rank a job catalog against the persisted profile skills.
    pub fn rank_jobs(&self, key: &str, catalog: &[JobPosting]) -> Result<Vec<MatchResult>> {
        let record = self.store.get(key)?.unwrap_or_default();
        Ok(self.matcher.rank(&record.skill_set(), catalog))
    }

    /// Compliance check for a dashboard load. `now` is injected; the prompt
    /// state is threaded by the caller and carries across re-evaluations.
    pub fn dashboard_check(
        &self,
        key: &str,
        now: DateTime<Utc>,
        state: PromptState,
    ) -> Result<SessionOutcome> {
        let record = self.store.get(key)?.unwrap_or_default();
        let assessment = record.assessment_record()?;
        Ok(self.policy.evaluate_session(&assessment, now, state))
    }

    pub fn profile(&self, key: &str) -> Result<Option<ProfileRecord>> {
        self.store.get(key)
    }

    pub fn benchmark(&self) -> &SkillSet {
        &self.benchmark
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }
}
