//! Vehicle diagnostics HTTP server library.
//!
//! Exposes the building blocks (config, error handling, form parsing, HTML
//! rendering, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod render;
pub mod response;
pub mod router;
pub mod routes;
