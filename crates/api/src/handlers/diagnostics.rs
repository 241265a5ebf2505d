//! JSON handlers for the diagnostics API.
//!
//! Exposes evaluation, the nominal default reading, and the rule catalogue.

use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vehidiag_core::evaluator::evaluate_checked;
use vehidiag_core::issue::{DiagnosticReport, ReportSummary, Severity};
use vehidiag_core::reading::VehicleReading;
use vehidiag_core::rules::RULE_GROUPS;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Result of evaluating one reading.
#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    /// The reading exactly as evaluated.
    pub reading: VehicleReading,
    /// Issues in evaluation order.
    pub issues: DiagnosticReport,
    pub summary: ReportSummary,
}

/// One rule group in the catalogue listing.
#[derive(Debug, Serialize)]
pub struct RuleGroupView {
    pub name: &'static str,
    pub tiers: Vec<RuleTierView>,
}

#[derive(Debug, Serialize)]
pub struct RuleTierView {
    pub component: &'static str,
    pub severity: Severity,
    pub criteria: &'static str,
    pub action: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/diagnostics
///
/// Evaluates the posted reading. Malformed bodies and missing fields are
/// rejected with 400 before evaluation.
pub async fn evaluate_reading(
    payload: Result<Json<VehicleReading>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(reading) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let report = evaluate_checked(&reading)?;
    tracing::debug!(
        issues = report.len(),
        highest = %report.highest_severity(),
        "Evaluated reading"
    );

    let summary = report.summary();
    Ok(Json(DataResponse {
        data: DiagnosisResponse {
            reading,
            issues: report,
            summary,
        },
    }))
}

/// GET /api/v1/diagnostics/defaults
///
/// Returns the nominal reading used to pre-fill the form.
pub async fn default_reading() -> Json<DataResponse<VehicleReading>> {
    Json(DataResponse {
        data: VehicleReading::nominal(),
    })
}

/// GET /api/v1/diagnostics/rules
///
/// Lists every rule group and its tiers in evaluation order.
pub async fn list_rules() -> Json<DataResponse<Vec<RuleGroupView>>> {
    let groups = RULE_GROUPS
        .iter()
        .map(|group| RuleGroupView {
            name: group.name,
            tiers: group
                .tiers
                .iter()
                .map(|tier| RuleTierView {
                    component: tier.component,
                    severity: tier.severity,
                    criteria: tier.criteria,
                    action: tier.action,
                })
                .collect(),
        })
        .collect();

    Json(DataResponse { data: groups })
}
