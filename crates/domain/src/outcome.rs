//! Run outcomes and the report produced by a completed activation.

use serde::{Deserialize, Serialize};

use crate::script::AutomationScript;
use crate::time::{self, Timestamp};

/// Binary result of running a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    /// The script completed successfully.
    Success,
    /// The script reported a failure.
    Failure,
}

impl RunOutcome {
    /// Whether this outcome is a success.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Report of a single completed activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// The script that was run.
    pub script: AutomationScript,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// When the run finished.
    pub finished_at: Timestamp,
}

impl RunReport {
    /// Create a report stamped with the current time.
    #[must_use]
    pub fn new(script: AutomationScript, outcome: RunOutcome) -> Self {
        Self {
            script,
            outcome,
            finished_at: time::now(),
        }
    }

    /// The user-visible message for this report.
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome {
            RunOutcome::Success => {
                format!("Automation script {} completed successfully", self.script.name)
            }
            RunOutcome::Failure => {
                format!("Error running automation script {}", self.script.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(name: &str) -> AutomationScript {
        AutomationScript::builder()
            .name(name)
            .description("test script")
            .build()
            .unwrap()
    }

    #[test]
    fn should_format_success_message() {
        let report = RunReport::new(script("Script 2"), RunOutcome::Success);
        assert_eq!(
            report.message(),
            "Automation script Script 2 completed successfully"
        );
    }

    #[test]
    fn should_format_failure_message() {
        let report = RunReport::new(script("Script 2"), RunOutcome::Failure);
        assert_eq!(report.message(), "Error running automation script Script 2");
    }

    #[test]
    fn should_mark_success_outcome() {
        assert!(RunOutcome::Success.is_success());
        assert!(!RunOutcome::Failure.is_success());
    }

    #[test]
    fn should_serialize_outcome_lowercase() {
        assert_eq!(
            serde_json::to_string(&RunOutcome::Success).unwrap(),
            r#""success""#
        );
        assert_eq!(
            serde_json::to_string(&RunOutcome::Failure).unwrap(),
            r#""failure""#
        );
    }

    #[test]
    fn should_display_outcome_lowercase() {
        assert_eq!(RunOutcome::Success.to_string(), "success");
        assert_eq!(RunOutcome::Failure.to_string(), "failure");
    }
}
