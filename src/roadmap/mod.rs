//! Roadmap and gap-analysis data structures
//!
//! The serialized shape here is the literal JSON contract consumed by
//! dashboard renderers and stored in the profile's `aiAnalysis` field, so
//! field names stay camelCase and optional collections default on read.

pub mod content;
pub mod generator;

pub use generator::RoadmapGenerator;

use serde::{Deserialize, Serialize};

/// Complete career gap analysis for one candidate skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAnalysis {
    /// Market-demand score for the candidate's current skills, 0..=100.
    pub trending_score: u8,
    pub skill_gap: SkillGap,
    /// Benchmark skills the candidate lacks, ranked by demand. Renderers
    /// tolerate this being absent in older stored records.
    #[serde(default)]
    pub future_predictions: Vec<FuturePrediction>,
    /// Week-indexed learning plan; the sequence is the canonical order.
    #[serde(default)]
    pub roadmap: Vec<RoadmapStep>,
}

/// Acquired/missing split against the benchmark; the two always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub acquired: u8,
    pub missing: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturePrediction {
    pub skill: String,
    pub reason: String,
    pub status: DemandStatus,
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Demand tier for a skill in the high-demand registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandStatus {
    Stable,
    Growing,
    Critical,
    Exploding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    /// 1-based week number; strictly increasing across the plan.
    pub week: u32,
    pub phase: String,
    pub topic: String,
    pub description: String,
    pub tip: String,
    pub free_resource: FreeResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeResource {
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_json_field_names() {
        let analysis = RoadmapAnalysis {
            trending_score: 70,
            skill_gap: SkillGap { acquired: 50, missing: 50 },
            future_predictions: vec![FuturePrediction {
                skill: "TypeScript".to_string(),
                reason: "High demand".to_string(),
                status: DemandStatus::Exploding,
                domains: vec!["Frontend".to_string()],
            }],
            roadmap: vec![RoadmapStep {
                week: 1,
                phase: "Foundation".to_string(),
                topic: "TypeScript".to_string(),
                description: "desc".to_string(),
                tip: "tip".to_string(),
                free_resource: FreeResource {
                    title: "Docs".to_string(),
                    link: "https://example.com".to_string(),
                    resource_type: "Docs".to_string(),
                },
            }],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("trendingScore").is_some());
        assert!(json.get("skillGap").is_some());
        assert!(json.get("futurePredictions").is_some());
        assert!(json["roadmap"][0].get("freeResource").is_some());
        assert_eq!(json["roadmap"][0]["freeResource"]["type"], "Docs");
    }

    #[test]
    fn test_missing_predictions_default_on_read() {
        let json = r#"{"trendingScore": 40, "skillGap": {"acquired": 40, "missing": 60}}"#;
        let analysis: RoadmapAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.future_predictions.is_empty());
        assert!(analysis.roadmap.is_empty());
    }
}
