//! Integration tests for the career-readiness engine

use career_readiness::compliance::PromptState;
use career_readiness::config::Config;
use career_readiness::engine::CareerEngine;
use career_readiness::matcher::JobPosting;
use career_readiness::profile::{JsonFileStore, MemoryStore, ProfileRecord, ProfileStore, ScoreValue};
use career_readiness::roadmap::RoadmapGenerator;
use career_readiness::skills::SkillSet;
use chrono::{Duration, Utc};
use std::path::Path;
use std::time::Duration as StdDuration;

fn load_catalog() -> Vec<JobPosting> {
    let content = std::fs::read_to_string(Path::new("tests/fixtures/jobs.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn load_resume() -> String {
    std::fs::read_to_string(Path::new("tests/fixtures/sample_resume.txt")).unwrap()
}

#[tokio::test]
async fn test_end_to_end_resume_to_ranked_jobs() {
    let config = Config::default();
    let mut engine = CareerEngine::new(&config, MemoryStore::new()).unwrap();

    let token = engine.begin_analysis();
    let analysis = engine
        .analyze_resume("jane@test.com", token, &load_resume())
        .unwrap()
        .expect("fresh analysis should apply");

    // The roadmap was persisted before ranking can observe the skills
    let record = engine.profile("jane@test.com").unwrap().unwrap();
    assert_eq!(record.ai_analysis.as_ref(), Some(&analysis));
    assert!(record.skills.iter().any(|s| s == "React"));

    let ranked = engine.rank_jobs("jane@test.com", &load_catalog()).unwrap();
    assert_eq!(ranked.len(), 4);
    // Scores descend, and the no-requirements posting trivially scores 100
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(ranked.iter().find(|r| r.job_id == "job-4").unwrap().score, 100);
    // Frontend posting beats the data-analyst one for this resume
    let frontend = ranked.iter().position(|r| r.job_id == "job-1").unwrap();
    let analyst = ranked.iter().position(|r| r.job_id == "job-3").unwrap();
    assert!(frontend < analyst);
}

#[tokio::test]
async fn test_superseded_analysis_never_wins() {
    let config = Config::default();
    let mut engine = CareerEngine::new(&config, MemoryStore::new()).unwrap();

    let older = engine.begin_analysis();
    let newer = engine.begin_analysis();

    // The newer submission's backend round trip finishes first
    tokio::time::sleep(StdDuration::from_millis(10)).await;
    engine
        .analyze_resume("u", newer, "Python, SQL and Docker experience")
        .unwrap()
        .expect("newer submission applies");

    // The older one straggles in afterwards and must be dropped
    tokio::time::sleep(StdDuration::from_millis(10)).await;
    let stale = engine.analyze_resume("u", older, "React only").unwrap();
    assert!(stale.is_none());

    let record = engine.profile("u").unwrap().unwrap();
    assert!(record.skills.iter().any(|s| s == "Docker"));
    assert!(!record.skills.iter().any(|s| s == "React"));
}

#[test]
fn test_gap_analysis_and_predictions_for_partial_coverage() {
    let generator = RoadmapGenerator::new(&Config::default());
    let candidate = SkillSet::from_labels(["React", "JavaScript"]);
    let benchmark = SkillSet::from_labels(["React", "JavaScript", "TypeScript", "AWS"]);

    let analysis = generator.generate(&candidate, &benchmark);
    assert_eq!(analysis.skill_gap.acquired, 50);
    assert_eq!(analysis.skill_gap.missing, 50);
    let skills: Vec<&str> = analysis.future_predictions.iter().map(|p| p.skill.as_str()).collect();
    assert!(skills.contains(&"TypeScript"));
    assert!(skills.contains(&"AWS"));

    // Cached and regenerated output are byte-identical
    let again = generator.generate(&candidate, &benchmark);
    assert_eq!(
        serde_json::to_vec(&analysis).unwrap(),
        serde_json::to_vec(&again).unwrap()
    );
}

#[test]
fn test_dashboard_session_threads_prompt_state() {
    let config = Config::default();
    let mut store = MemoryStore::new();

    let mut record = ProfileRecord::new();
    record.last_assessment_date = Some((Utc::now() - Duration::days(20)).to_rfc3339());
    record.assessment_score = Some(ScoreValue::Text("90".to_string()));
    store.put("u", &record).unwrap();

    let engine = CareerEngine::new(&config, store).unwrap();
    let now = Utc::now();

    // First dashboard load of the session: expired assessment blocks once
    let first = engine.dashboard_check("u", now, PromptState::NotShown).unwrap();
    assert!(!first.verdict.compliant);
    assert!(first.show_prompt);

    // Navigating away and back re-evaluates without a second prompt
    let second = engine.dashboard_check("u", now, first.state).unwrap();
    assert!(!second.verdict.compliant);
    assert!(!second.show_prompt);
}

#[test]
fn test_warning_banner_for_stored_record() {
    let config = Config::default();
    let mut store = MemoryStore::new();

    let mut record = ProfileRecord::new();
    record.last_assessment_date = Some((Utc::now() - Duration::days(13)).to_rfc3339());
    record.assessment_score = Some(ScoreValue::Number(80));
    store.put("u", &record).unwrap();

    let engine = CareerEngine::new(&config, store).unwrap();
    let outcome = engine.dashboard_check("u", Utc::now(), PromptState::NotShown).unwrap();
    assert!(outcome.verdict.compliant);
    assert!(outcome.verdict.warning);
    assert_eq!(outcome.verdict.days_left, 2);
    assert!(!outcome.show_prompt);
}

#[test]
fn test_malformed_stored_score_is_an_error() {
    let config = Config::default();
    let mut store = MemoryStore::new();

    let mut record = ProfileRecord::new();
    record.last_assessment_date = Some(Utc::now().to_rfc3339());
    record.assessment_score = Some(ScoreValue::Text("ninety".to_string()));
    store.put("u", &record).unwrap();

    let engine = CareerEngine::new(&config, store).unwrap();
    assert!(engine.dashboard_check("u", Utc::now(), PromptState::NotShown).is_err());
}

#[tokio::test]
async fn test_profiles_survive_store_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    let config = Config::default();

    {
        let mut engine = CareerEngine::new(&config, JsonFileStore::new(&path)).unwrap();
        let token = engine.begin_analysis();
        engine.analyze_resume("jane@test.com", token, &load_resume()).unwrap();
    }

    // A new engine over the same file sees the persisted profile
    let engine = CareerEngine::new(&config, JsonFileStore::new(&path)).unwrap();
    let record = engine.profile("jane@test.com").unwrap().unwrap();
    assert!(record.ai_analysis.is_some());
    assert!(record.skills.iter().any(|s| s == "JavaScript"));
}

#[test]
fn test_custom_benchmark_drives_gap() {
    let config = Config::default();
    let engine = CareerEngine::new(&config, MemoryStore::new())
        .unwrap()
        .with_benchmark(SkillSet::from_labels(["React", "TypeScript"]));
    assert_eq!(engine.benchmark().len(), 2);
}
