pub mod diagnostics;
pub mod health;
pub mod page;

use axum::Router;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /diagnostics                                     evaluate a reading (POST)
/// /diagnostics/defaults                            nominal reading (GET)
/// /diagnostics/rules                               rule catalogue (GET)
/// ```
pub fn api_routes() -> Router {
    Router::new().merge(diagnostics::router())
}
