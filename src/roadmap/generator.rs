//! Deterministic gap analysis and learning-plan generation

use super::content::{
    self, content_for, demand_rank, domains_for, DEFAULT_BENCHMARK, GENERIC_REASON, GENERIC_RESOURCE,
    GENERIC_TIP,
};
use super::{DemandStatus, FreeResource, FuturePrediction, RoadmapAnalysis, RoadmapStep, SkillGap};
use crate::config::{Config, RoadmapConfig, ScoringConfig};
use crate::skills::SkillSet;
use log::debug;

/// Produces a [`RoadmapAnalysis`] from a candidate skill set.
///
/// `generate` is pure: identical inputs yield byte-identical serialized
/// output, so results can be cached in the profile record and re-displayed
/// without recomputation.
pub struct RoadmapGenerator {
    scoring: ScoringConfig,
    roadmap: RoadmapConfig,
}

impl RoadmapGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            scoring: config.scoring.clone(),
            roadmap: config.roadmap.clone(),
        }
    }

    /// The built-in benchmark, used when the caller supplies none.
    pub fn default_benchmark() -> SkillSet {
        SkillSet::from_labels(DEFAULT_BENCHMARK)
    }

    pub fn generate(&self, candidate: &SkillSet, benchmark: &SkillSet) -> RoadmapAnalysis {
        let acquired = if benchmark.is_empty() {
            100
        } else {
            let matched = candidate.intersection_size(benchmark);
            (100.0 * matched as f64 / benchmark.len() as f64).round().clamp(0.0, 100.0) as u8
        };
        let skill_gap = SkillGap {
            acquired,
            missing: 100 - acquired,
        };

        let missing = self.missing_by_demand(candidate, benchmark);
        debug!(
            "generated gap analysis: {} candidate skills, {} missing of {} benchmark",
            candidate.len(),
            missing.len(),
            benchmark.len()
        );

        RoadmapAnalysis {
            trending_score: self.trending_score(candidate),
            skill_gap,
            future_predictions: self.predictions(&missing),
            roadmap: self.plan(&missing),
        }
    }

    /// Market-demand score, 0..=100. Monotone in high-demand skills: adding
    /// a registry skill never lowers it, removing one never raises it.
    fn trending_score(&self, candidate: &SkillSet) -> u8 {
        let registry_held = content::DEMAND_REGISTRY
            .iter()
            .filter(|entry| candidate.contains(entry.skill))
            .count();
        let registry_missing = content::DEMAND_REGISTRY.len() - registry_held;

        let breadth = candidate.len().min(self.scoring.breadth_cap) as f32 * self.scoring.breadth_weight;
        let raw = self.scoring.base_score + breadth
            + registry_held as f32 * self.scoring.presence_weight
            - registry_missing as f32 * self.scoring.absence_penalty;

        raw.round().clamp(0.0, 100.0) as u8
    }

    /// Benchmark skills the candidate lacks, ranked by the demand registry's
    /// fixed ordering. Unregistered skills keep their benchmark order after
    /// the registered ones (stable sort).
    fn missing_by_demand(&self, candidate: &SkillSet, benchmark: &SkillSet) -> Vec<String> {
        let mut missing = benchmark.difference(candidate);
        missing.sort_by_key(|skill| demand_rank(skill).map(|(rank, _)| rank).unwrap_or(usize::MAX));
        missing
    }

    fn predictions(&self, missing: &[String]) -> Vec<FuturePrediction> {
        missing
            .iter()
            .take(self.roadmap.prediction_count)
            .map(|skill| match demand_rank(skill) {
                Some((_, entry)) => FuturePrediction {
                    skill: skill.clone(),
                    reason: entry.reason.to_string(),
                    status: entry.status,
                    domains: domains_for(skill),
                },
                None => FuturePrediction {
                    skill: skill.clone(),
                    reason: GENERIC_REASON.to_string(),
                    status: DemandStatus::Stable,
                    domains: domains_for(skill),
                },
            })
            .collect()
    }

    /// One topic per week, weeks consecutive from 1, phases cycling.
    fn plan(&self, missing: &[String]) -> Vec<RoadmapStep> {
        missing
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let phase = if self.roadmap.phases.is_empty() {
                    String::new()
                } else {
                    self.roadmap.phases[i % self.roadmap.phases.len()].clone()
                };
                let (description, tip, free_resource) = match content_for(skill) {
                    Some(content) => (
                        content.description.to_string(),
                        content.tip.to_string(),
                        FreeResource {
                            title: content.resource_title.to_string(),
                            link: content.resource_link.to_string(),
                            resource_type: content.resource_type.to_string(),
                        },
                    ),
                    None => (
                        format!("Build working knowledge of {} through a small hands-on project.", skill),
                        GENERIC_TIP.to_string(),
                        FreeResource {
                            title: GENERIC_RESOURCE.0.to_string(),
                            link: GENERIC_RESOURCE.1.to_string(),
                            resource_type: GENERIC_RESOURCE.2.to_string(),
                        },
                    ),
                };
                RoadmapStep {
                    week: (i + 1) as u32,
                    phase,
                    topic: skill.clone(),
                    description,
                    tip,
                    free_resource,
                }
            })
            .collect()
    }
}
