//! Response contract of the downstream architecture linter.
//!
//! The linter consumes the finalized graph and reports one `Violation` per
//! breached layer-isolation rule. Only the data shapes live here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One breached rule between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub message: String,
    /// Id of the importing node.
    pub source: String,
    /// Id of the imported node.
    pub target: String,
    pub severity: Severity,
    /// Context of the target, for cross-context breaches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_context: Option<String>,
}

/// A batch of violations from one lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    pub violations: Vec<Violation>,
    pub total_scanned: usize,
    pub success: bool,
}

impl LintReport {
    /// Build a report. The run succeeds when no violation has error severity.
    pub fn from_violations(violations: Vec<Violation>, total_scanned: usize) -> Self {
        let success = !violations.iter().any(|v| v.severity == Severity::Error);
        Self {
            violations,
            total_scanned,
            success,
        }
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}
