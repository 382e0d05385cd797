//! The persisted career profile record and its persistence port
//!
//! The record's on-disk field names (`skills`, `aiAnalysis`,
//! `lastAssessmentDate`, `assessmentScore`) are the contract shared with the
//! surrounding platform. Assessment fields are written by the assessment
//! collaborator and only ever read here; stored values are parsed leniently
//! (score as number or numeric string) but genuinely malformed values fail
//! fast, distinct from the normal "no record" state.

use crate::error::{CareerReadinessError, Result};
use crate::roadmap::RoadmapAnalysis;
use crate::skills::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Result of resume analysis, produced by the extraction collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    #[serde(default)]
    pub extracted_skills: SkillSet,
    #[serde(default)]
    pub missing_skills: SkillSet,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Assessment score as persisted: the platform writes it sometimes as a JSON
/// number and sometimes as an integer string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(i64),
    Text(String),
}

/// One user's persisted record. Created empty at registration, overwritten
/// whole on each update (single writer per session, last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<RoadmapAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assessment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_score: Option<ScoreValue>,
}

/// Assessment facts parsed out of a [`ProfileRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub last_assessment_date: Option<DateTime<Utc>>,
    pub last_score: Option<u8>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_set(&self) -> SkillSet {
        SkillSet::from_labels(&self.skills)
    }

    /// Parse the stored assessment fields. Absent or blank fields are a
    /// normal "no record" state; unparseable ones are an error.
    pub fn assessment_record(&self) -> Result<AssessmentRecord> {
        let last_assessment_date = match self.last_assessment_date.as_deref() {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(
                DateTime::parse_from_rfc3339(s.trim())
                    .map_err(|e| {
                        CareerReadinessError::MalformedRecord(format!(
                            "lastAssessmentDate '{}' is not an ISO-8601 timestamp: {}",
                            s, e
                        ))
                    })?
                    .with_timezone(&Utc),
            ),
        };

        let last_score = match &self.assessment_score {
            None => None,
            Some(ScoreValue::Number(n)) => Some(Self::check_score_range(*n)?),
            Some(ScoreValue::Text(s)) if s.trim().is_empty() => None,
            Some(ScoreValue::Text(s)) => {
                let n: i64 = s.trim().parse().map_err(|_| {
                    CareerReadinessError::MalformedRecord(format!(
                        "assessmentScore '{}' is not a number",
                        s
                    ))
                })?;
                Some(Self::check_score_range(n)?)
            }
        };

        Ok(AssessmentRecord {
            last_assessment_date,
            last_score,
        })
    }

    fn check_score_range(n: i64) -> Result<u8> {
        if (0..=100).contains(&n) {
            Ok(n as u8)
        } else {
            Err(CareerReadinessError::MalformedRecord(format!(
                "assessmentScore {} is outside 0..=100",
                n
            )))
        }
    }
}

/// Persistence port. Engines stay pure; callers inject whichever store the
/// deployment uses.
pub trait ProfileStore {
    fn get(&self, key: &str) -> Result<Option<ProfileRecord>>;
    fn put(&mut self, key: &str, record: &ProfileRecord) -> Result<()>;
}

impl ProfileStore for Box<dyn ProfileStore> {
    fn get(&self, key: &str) -> Result<Option<ProfileRecord>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, record: &ProfileRecord) -> Result<()> {
        (**self).put(key, record)
    }
}

/// In-memory store for tests and single-run CLI use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, ProfileRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<ProfileRecord>> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, record: &ProfileRecord) -> Result<()> {
        self.records.insert(key.to_string(), record.clone());
        Ok(())
    }
}

/// Key-value store over a single JSON file: one `{ key: record }` map,
/// rewritten whole on every put. Concurrent writers are not reconciled.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default location under the user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-readiness")
            .join("profiles.json")
    }

    fn load_all(&self) -> Result<HashMap<String, ProfileRecord>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl ProfileStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<ProfileRecord>> {
        Ok(self.load_all()?.remove(key))
    }

    fn put(&mut self, key: &str, record: &ProfileRecord) -> Result<()> {
        let mut records = self.load_all()?;
        records.insert(key.to_string(), record.clone());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, content)
            .map_err(|e| CareerReadinessError::Storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_has_no_assessment() {
        let record = ProfileRecord::new();
        let assessment = record.assessment_record().unwrap();
        assert!(assessment.last_assessment_date.is_none());
        assert!(assessment.last_score.is_none());
    }

    #[test]
    fn test_score_parses_from_number_and_string() {
        let mut record = ProfileRecord::new();
        record.assessment_score = Some(ScoreValue::Number(80));
        assert_eq!(record.assessment_record().unwrap().last_score, Some(80));

        record.assessment_score = Some(ScoreValue::Text(" 75 ".to_string()));
        assert_eq!(record.assessment_record().unwrap().last_score, Some(75));
    }

    #[test]
    fn test_non_numeric_score_fails_fast() {
        let mut record = ProfileRecord::new();
        record.assessment_score = Some(ScoreValue::Text("eighty".to_string()));
        let err = record.assessment_record().unwrap_err();
        assert!(matches!(err, CareerReadinessError::MalformedRecord(_)));
    }

    #[test]
    fn test_out_of_range_score_fails_fast() {
        let mut record = ProfileRecord::new();
        record.assessment_score = Some(ScoreValue::Number(180));
        assert!(record.assessment_record().is_err());
    }

    #[test]
    fn test_date_parses_iso8601() {
        let mut record = ProfileRecord::new();
        record.last_assessment_date = Some("2026-08-15T10:30:00Z".to_string());
        let assessment = record.assessment_record().unwrap();
        assert!(assessment.last_assessment_date.is_some());

        record.last_assessment_date = Some("yesterday".to_string());
        assert!(record.assessment_record().is_err());
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let mut record = ProfileRecord::new();
        record.last_assessment_date = Some("  ".to_string());
        record.assessment_score = Some(ScoreValue::Text(String::new()));
        let assessment = record.assessment_record().unwrap();
        assert!(assessment.last_assessment_date.is_none());
        assert!(assessment.last_score.is_none());
    }

    #[test]
    fn test_record_json_field_names() {
        let mut record = ProfileRecord::new();
        record.skills = vec!["React".to_string()];
        record.last_assessment_date = Some("2026-08-15T10:30:00Z".to_string());
        record.assessment_score = Some(ScoreValue::Number(90));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("skills").is_some());
        assert!(json.get("lastAssessmentDate").is_some());
        assert!(json.get("assessmentScore").is_some());
        // ai_analysis omitted while empty
        assert!(json.get("aiAnalysis").is_none());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let mut record = ProfileRecord::new();
        record.skills = vec!["Rust".to_string()];
        store.put("user@test.com", &record).unwrap();
        let loaded = store.get("user@test.com").unwrap().unwrap();
        assert_eq!(loaded.skills, record.skills);
        assert!(store.get("other@test.com").unwrap().is_none());
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("profiles.json"));

        assert!(store.get("user@test.com").unwrap().is_none());

        let mut record = ProfileRecord::new();
        record.skills = vec!["React".to_string(), "SQL".to_string()];
        store.put("user@test.com", &record).unwrap();

        // Overwrite wins
        record.skills.push("AWS".to_string());
        store.put("user@test.com", &record).unwrap();

        let loaded = store.get("user@test.com").unwrap().unwrap();
        assert_eq!(loaded.skills.len(), 3);
    }
}
