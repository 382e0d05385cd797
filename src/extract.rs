//! Skill extraction from resume text
//!
//! Dictionary matching against a known-skill registry: Aho-Corasick for
//! case-insensitive exact hits with word-boundary filtering, Jaro-Winkler
//! for near-miss spellings. Also pulls contact details out of the text.
//! This is deliberately not NLP; callers wanting inference are expected to
//! hand the engine a skill list from elsewhere.

use crate::error::{CareerReadinessError, Result};
use crate::profile::ResumeProfile;
use crate::roadmap::content::{demand_rank, DEFAULT_BENCHMARK, DEMAND_REGISTRY};
use crate::skills::{normalize, SkillSet};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use strsim::jaro_winkler;

/// Extracts known skills and contact details from free-form resume text.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    registry: Vec<String>,
    fuzzy_threshold: f64,
    email_re: Regex,
    phone_re: Regex,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Build an extractor with extra registry entries beyond the defaults.
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut registry = Self::default_registry();
        registry.extend(additional_skills);
        registry.sort_by_key(|s| normalize(s));
        registry.dedup_by_key(|s| normalize(s));

        // Longest match wins so "JavaScript" is never reported as "Java"
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&registry)
            .map_err(|e| CareerReadinessError::AnalysisFailed(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            matcher,
            registry,
            fuzzy_threshold: 0.9,
            email_re: Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+")
                .map_err(|e| CareerReadinessError::AnalysisFailed(e.to_string()))?,
            phone_re: Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}")
                .map_err(|e| CareerReadinessError::AnalysisFailed(e.to_string()))?,
        })
    }

    /// Skills found in `text`, deduplicated via normalized form. Empty text
    /// yields an empty set, never an error.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        let mut found = SkillSet::new();
        let bytes = text.as_bytes();

        for mat in self.matcher.find_iter(text) {
            // Word-boundary check so "Java" inside "JavaScript" never counts
            let before_ok = mat.start() == 0 || !Self::is_word_byte(bytes[mat.start() - 1]);
            let after_ok = mat.end() == bytes.len() || !Self::is_word_byte(bytes[mat.end()]);
            if before_ok && after_ok {
                found.insert(&self.registry[mat.pattern().as_usize()]);
            }
        }

        self.extend_with_fuzzy(text, &mut found);
        debug!("extracted {} skills from {} chars of text", found.len(), text.len());
        found
    }

    /// Tolerate near-miss spellings ("Pythong", "Reactjs") by matching each
    /// word against the registry with Jaro-Winkler and keeping the best hit.
    fn extend_with_fuzzy(&self, text: &str, found: &mut SkillSet) {
        for word in text.split_whitespace() {
            let clean = Self::clean_word(word);
            if clean.len() < 4 {
                continue;
            }
            let key = normalize(&clean);
            // Exact registry words are already handled above
            if self.registry.iter().any(|s| normalize(s) == key) {
                continue;
            }

            let best = self
                .registry
                .iter()
                .map(|skill| (skill, jaro_winkler(&key, &normalize(skill))))
                .max_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((skill, similarity)) = best {
                if similarity >= self.fuzzy_threshold {
                    found.insert(skill);
                }
            }
        }
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_re.find(text).map(|m| m.as_str().to_string())
    }

    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_re.find(text).map(|m| m.as_str().to_string())
    }

    /// Full resume analysis against a benchmark: extracted skills, missing
    /// skills, a summary line, and concrete improvement suggestions.
    /// Deterministic for identical inputs.
    pub fn analyze(&self, text: &str, benchmark: &SkillSet) -> ResumeProfile {
        let extracted_skills = self.extract_skills(text);
        let mut missing = benchmark.difference(&extracted_skills);
        missing.sort_by_key(|skill| demand_rank(skill).map(|(rank, _)| rank).unwrap_or(usize::MAX));

        let summary = if extracted_skills.is_empty() {
            "No recognizable skills found. Add an explicit skills section to your resume.".to_string()
        } else {
            format!(
                "Found {} recognizable skills; {} benchmark skills still missing for your track.",
                extracted_skills.len(),
                missing.len()
            )
        };

        let mut improvements: Vec<String> = missing
            .iter()
            .take(3)
            .map(|skill| format!("Add a project showcasing {} usage", skill))
            .collect();
        improvements.push("Include quantifiable metrics in your experience section".to_string());

        ResumeProfile {
            extracted_skills,
            missing_skills: SkillSet::from_labels(&missing),
            summary,
            improvements,
        }
    }

    pub fn registry_size(&self) -> usize {
        self.registry.len()
    }

    fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric()
    }

    fn clean_word(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '+' | '#' | '.'))
            .collect()
    }

    fn default_registry() -> Vec<String> {
        let mut registry: Vec<String> = DEMAND_REGISTRY.iter().map(|e| e.skill.to_string()).collect();
        registry.extend(DEFAULT_BENCHMARK.iter().map(|s| s.to_string()));
        registry.extend(
            [
                "C++",
                "C#",
                "Angular",
                "Vue",
                "HTML",
                "CSS",
                "Tailwind CSS",
                "NoSQL",
                "MongoDB",
                "PostgreSQL",
                "MySQL",
                "Azure",
                "GCP",
                "Jenkins",
                "CI/CD",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "Scikit-learn",
                "Pandas",
                "NumPy",
                "NLP",
                "Computer Vision",
                "GitHub",
                "Linux",
                "Agile",
                "Scrum",
                "Kotlin",
                "Swift",
                "Rust",
                "Communication",
                "Leadership",
                "Problem Solving",
                "Teamwork",
            ]
            .iter()
            .map(|s| s.to_string()),
        );
        registry
    }
}
