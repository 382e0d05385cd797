//! Assessment-compliance policy and session prompt state machine
//!
//! Evaluation is a pure function of the assessment record and an injected
//! `now`; nothing here reads a wall clock. The one-time blocking prompt is
//! tracked as explicit state threaded through the caller, never as ambient
//! session storage.

use crate::config::{ComplianceConfig, Config};
use crate::profile::AssessmentRecord;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Derived verdict for one dashboard load. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceVerdict {
    pub compliant: bool,
    pub warning: bool,
    pub days_left: i64,
}

impl ComplianceVerdict {
    fn non_compliant() -> Self {
        Self {
            compliant: false,
            warning: false,
            days_left: 0,
        }
    }
}

/// Whether the blocking prompt has been shown this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptState {
    NotShown,
    Shown,
}

/// Result of a session-aware evaluation: the verdict, whether to emit the
/// one-time blocking prompt now, and the state to carry forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub verdict: ComplianceVerdict,
    pub show_prompt: bool,
    pub state: PromptState,
}

/// Evaluates assessment validity against the configured time window and
/// score threshold.
pub struct CompliancePolicy {
    config: ComplianceConfig,
}

impl CompliancePolicy {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.compliance.clone(),
        }
    }

    /// Verdict for `record` as of `now`.
    ///
    /// A record with a date but no score counts as score 0. A date in the
    /// future (clock skew) clamps elapsed time to zero, so `days_left` never
    /// exceeds the window and never goes negative.
    pub fn evaluate(&self, record: &AssessmentRecord, now: DateTime<Utc>) -> ComplianceVerdict {
        let Some(last) = record.last_assessment_date else {
            return ComplianceVerdict::non_compliant();
        };

        let elapsed_days = (now - last).num_days().max(0);
        let score = record.last_score.unwrap_or(0);
        debug!("compliance check: elapsed {} days, score {}", elapsed_days, score);

        if elapsed_days >= self.config.validity_days || score < self.config.min_score {
            return ComplianceVerdict::non_compliant();
        }

        let days_left = self.config.validity_days - elapsed_days;
        ComplianceVerdict {
            compliant: true,
            warning: days_left <= self.config.warning_days,
            days_left,
        }
    }

    /// Session-aware evaluation. The blocking prompt is emitted at most once
    /// per session: only on a non-compliant verdict while in `NotShown`.
    /// Dismissing the prompt does not revert the state; the warning banner
    /// is independent of it and carries no session memory.
    pub fn evaluate_session(
        &self,
        record: &AssessmentRecord,
        now: DateTime<Utc>,
        state: PromptState,
    ) -> SessionOutcome {
        let verdict = self.evaluate(record, now);
        let show_prompt = !verdict.compliant && state == PromptState::NotShown;
        SessionOutcome {
            verdict,
            show_prompt,
            state: if show_prompt { PromptState::Shown } else { state },
        }
    }
}
