//! Skill label normalization and set operations
//!
//! Every engine in the crate compares skills through this module so that
//! "React ", "react" and "REACT" count as the same skill while one display
//! form is kept for rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical form of a skill label: trimmed and lower-cased.
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// A set of skill labels keyed by normalized form.
///
/// Iteration order is the normalized order, which makes every consumer of a
/// `SkillSet` deterministic regardless of the order labels arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    labels: BTreeMap<String, String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any sequence of labels, deduplicating via the
    /// normalized form. The first display form seen for a skill wins.
    /// Blank labels are dropped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for label in labels {
            set.insert(label.as_ref());
        }
        set
    }

    /// Treat an absent skill list as an empty set.
    pub fn from_optional(labels: Option<&[String]>) -> Self {
        match labels {
            Some(labels) => Self::from_labels(labels),
            None => Self::new(),
        }
    }

    pub fn insert(&mut self, label: &str) {
        let key = normalize(label);
        if key.is_empty() {
            return;
        }
        self.labels.entry(key).or_insert_with(|| label.trim().to_string());
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(&normalize(label))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of skills present in both sets, compared by normalized form.
    pub fn intersection_size(&self, other: &SkillSet) -> usize {
        if self.len() > other.len() {
            return other.intersection_size(self);
        }
        self.labels.keys().filter(|k| other.labels.contains_key(*k)).count()
    }

    /// Number of distinct skills across both sets.
    pub fn union_size(&self, other: &SkillSet) -> usize {
        self.len() + other.len() - self.intersection_size(other)
    }

    /// Display forms of skills in `self` that `other` lacks, in normalized order.
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.labels
            .iter()
            .filter(|(key, _)| !other.labels.contains_key(*key))
            .map(|(_, display)| display.clone())
            .collect()
    }

    /// Display forms in normalized order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(|s| s.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.labels.values().cloned().collect()
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  React "), "react");
        assert_eq!(normalize("TypeScript"), "typescript");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = SkillSet::from_labels(["React", "react", " REACT "]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("ReAcT"));
        // First display form wins
        assert_eq!(set.to_vec(), vec!["React".to_string()]);
    }

    #[test]
    fn test_blank_labels_dropped() {
        let set = SkillSet::from_labels(["", "  ", "Rust"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_absent_input_is_empty() {
        let set = SkillSet::from_optional(None);
        assert!(set.is_empty());
        assert_eq!(set.intersection_size(&SkillSet::new()), 0);
    }

    #[test]
    fn test_intersection_and_union() {
        let a = SkillSet::from_labels(["React", "JavaScript", "AWS"]);
        let b = SkillSet::from_labels(["react", "typescript"]);
        assert_eq!(a.intersection_size(&b), 1);
        assert_eq!(a.union_size(&b), 4);
        assert_eq!(b.intersection_size(&a), 1);
    }

    #[test]
    fn test_difference_preserves_display_form() {
        let a = SkillSet::from_labels(["TypeScript", "AWS", "React"]);
        let b = SkillSet::from_labels(["react"]);
        // Normalized (alphabetical) order: aws, typescript
        assert_eq!(a.difference(&b), vec!["AWS".to_string(), "TypeScript".to_string()]);
    }

    #[test]
    fn test_serde_round_trip() {
        let set = SkillSet::from_labels(["React", "Node.js"]);
        let json = serde_json::to_string(&set).unwrap();
        let back: SkillSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
