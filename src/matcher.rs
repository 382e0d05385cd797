//! Skill matching and job ranking

use crate::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// One posting from the job catalog. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    /// Required skills as listed in the catalog; missing means none required.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl JobPosting {
    pub fn required_skills(&self) -> SkillSet {
        SkillSet::from_labels(&self.skills)
    }
}

/// Derived match score for one posting. Never persisted; always recomputed
/// from the current profile skills and the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub score: u8,
}

/// Scores a candidate skill set against job requirements.
#[derive(Debug, Default)]
pub struct SkillMatcher;

impl SkillMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Percentage of required skills the candidate holds, 0..=100.
    ///
    /// An empty requirement set scores 100: nothing is required, so the
    /// candidate trivially satisfies the posting.
    pub fn score(&self, candidate: &SkillSet, required: &SkillSet) -> u8 {
        if required.is_empty() {
            return 100;
        }
        let matched = candidate.intersection_size(required);
        let score = (100.0 * matched as f64 / required.len() as f64).round();
        score.clamp(0.0, 100.0) as u8
    }

    /// Rank a catalog for a candidate: descending score, with the catalog's
    /// original relative order breaking ties (stable sort, so identical
    /// inputs always produce identical rankings).
    pub fn rank(&self, candidate: &SkillSet, catalog: &[JobPosting]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .map(|job| MatchResult {
                job_id: job.id.clone(),
                score: self.score(candidate, &job.required_skills()),
            })
            .collect();
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: "10 LPA".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_score_bounds() {
        let matcher = SkillMatcher::new();
        let a = SkillSet::from_labels(["React", "JavaScript"]);
        let b = SkillSet::from_labels(["Rust", "Go", "C++"]);
        let score = matcher.score(&a, &b);
        assert!(score <= 100);
    }

    #[test]
    fn test_score_self_is_100() {
        let matcher = SkillMatcher::new();
        let a = SkillSet::from_labels(["React", "javascript", " AWS "]);
        let b = SkillSet::from_labels(["react", "JavaScript", "aws"]);
        assert_eq!(matcher.score(&a, &b), 100);
    }

    #[test]
    fn test_empty_requirements_score_100() {
        let matcher = SkillMatcher::new();
        let a = SkillSet::from_labels(["React"]);
        assert_eq!(matcher.score(&a, &SkillSet::new()), 100);
        assert_eq!(matcher.score(&SkillSet::new(), &SkillSet::new()), 100);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let matcher = SkillMatcher::new();
        let required = SkillSet::from_labels(["React"]);
        assert_eq!(matcher.score(&SkillSet::new(), &required), 0);
    }

    #[test]
    fn test_partial_match_rounds() {
        let matcher = SkillMatcher::new();
        let candidate = SkillSet::from_labels(["React"]);
        let required = SkillSet::from_labels(["React", "TypeScript", "AWS"]);
        // 1/3 of requirements -> 33
        assert_eq!(matcher.score(&candidate, &required), 33);
    }

    #[test]
    fn test_rank_descending_stable() {
        let matcher = SkillMatcher::new();
        let candidate = SkillSet::from_labels(["React", "JavaScript"]);
        let catalog = vec![
            job("a", &["Rust"]),
            job("b", &["React", "JavaScript"]),
            job("c", &["Go"]),
            job("d", &["React", "TypeScript"]),
        ];
        let ranked = matcher.rank(&candidate, &catalog);
        let ids: Vec<&str> = ranked.iter().map(|r| r.job_id.as_str()).collect();
        // b = 100, d = 50, then a and c tie at 0 in catalog order
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_missing_skills_field_deserializes_empty() {
        let json = r#"{"id": "j1", "title": "Intern"}"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert!(posting.skills.is_empty());
        let matcher = SkillMatcher::new();
        assert_eq!(matcher.score(&SkillSet::new(), &posting.required_skills()), 100);
    }
}
