//! Handlers for the browser-facing diagnostics form.
//!
//! `GET /` shows the form pre-filled with nominal values; `POST /` evaluates
//! the submission and renders the report beneath the form.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use vehidiag_core::evaluator::evaluate;
use vehidiag_core::reading::VehicleReading;

use crate::error::{AppError, AppResult};
use crate::form::ReadingForm;
use crate::render::{render_page, PageContext};

/// GET /
pub async fn show_form() -> AppResult<Html<String>> {
    let page = render_page(&PageContext::form(&VehicleReading::nominal()))?;
    Ok(Html(page))
}

/// POST /
///
/// A missing or malformed field re-renders the form with the submitted
/// text and an error banner (400). The evaluator only ever sees a complete
/// reading.
pub async fn submit_form(form: Result<Form<ReadingForm>, FormRejection>) -> AppResult<Response> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let reading = match form.to_reading() {
        Ok(reading) => reading,
        Err(err) => {
            tracing::info!(error = %err, "Rejected diagnostics form submission");
            let message = err.to_string();
            let page = render_page(&PageContext::with_error(form.raw_values(), &message))?;
            return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
        }
    };

    let report = evaluate(&reading);
    tracing::debug!(
        issues = report.len(),
        highest = %report.highest_severity(),
        "Evaluated form submission"
    );

    let page = render_page(&PageContext::with_report(&reading, &report))?;
    Ok(Html(page).into_response())
}
