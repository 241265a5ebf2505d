//! Diagnostic output types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgently an issue needs attention. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected abnormal condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Short subsystem label, e.g. `"Brake pads"`.
    pub component: String,
    pub severity: Severity,
    /// Explanation embedding the measurement(s) that triggered the rule.
    pub reason: String,
    /// Recommended remedy.
    pub action: String,
}

/// Ordered result of one evaluation. Never empty.
///
/// Entries appear in rule-group order, not sorted by severity. Consumers
/// must present them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticReport(Vec<Issue>);

impl DiagnosticReport {
    /// Build a report from evaluated issues, substituting `fallback` when
    /// nothing fired so the report is never empty.
    pub(crate) fn from_issues(mut issues: Vec<Issue>, fallback: impl FnOnce() -> Issue) -> Self {
        if issues.is_empty() {
            issues.push(fallback());
        }
        Self(issues)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.0
    }

    /// `true` when the only entry is the "no critical issues" sentinel.
    pub fn is_nominal(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.component == crate::rules::NOMINAL_COMPONENT)
    }

    /// The most severe entry's severity.
    pub fn highest_severity(&self) -> Severity {
        self.0
            .iter()
            .map(|i| i.severity)
            .max()
            .unwrap_or(Severity::Low)
    }

    /// Severity counts across the report.
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.0.len(),
            high: 0,
            medium: 0,
            low: 0,
            highest: self.highest_severity(),
        };
        for issue in &self.0 {
            match issue.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a DiagnosticReport {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Aggregated severity counts for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub highest: Severity,
}
