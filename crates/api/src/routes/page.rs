use axum::routing::get;
use axum::Router;

use crate::handlers::page;

/// Mount the HTML form at the site root.
pub fn router() -> Router {
    Router::new().route("/", get(page::show_form).post(page::submit_form))
}
