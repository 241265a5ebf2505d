//! Route definitions for the JSON diagnostics API.
//!
//! ```text
//! /diagnostics                 evaluate a reading (POST)
//! /diagnostics/defaults        nominal reading (GET)
//! /diagnostics/rules           rule catalogue (GET)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::diagnostics;

pub fn router() -> Router {
    Router::new()
        .route("/diagnostics", post(diagnostics::evaluate_reading))
        .route("/diagnostics/defaults", get(diagnostics::default_reading))
        .route("/diagnostics/rules", get(diagnostics::list_rules))
}
