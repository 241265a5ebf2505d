//! Diagnostic evaluation.
//!
//! Pure logic with no shared state: every call builds its report from the
//! reading alone, so evaluations may run concurrently without coordination.

use crate::error::CoreError;
use crate::issue::DiagnosticReport;
use crate::reading::VehicleReading;
use crate::rules::{nominal_issue, RULE_GROUPS};

/// Evaluate every rule group in order and collect the issues that fire.
///
/// Each group contributes at most one issue. When none fire, the report
/// holds the single "no critical issues" sentinel.
pub fn evaluate(reading: &VehicleReading) -> DiagnosticReport {
    let issues = RULE_GROUPS
        .iter()
        .filter_map(|group| group.evaluate(reading))
        .collect();
    DiagnosticReport::from_issues(issues, nominal_issue)
}

/// [`evaluate`] after rejecting non-finite measurements.
pub fn evaluate_checked(reading: &VehicleReading) -> Result<DiagnosticReport, CoreError> {
    reading.validate()?;
    Ok(evaluate(reading))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
