//! Rule-based vehicle diagnostics.
//!
//! Pure domain logic with no I/O: a [`reading::VehicleReading`] goes in,
//! a never-empty [`issue::DiagnosticReport`] comes out. The HTTP boundary
//! lives in `vehidiag-api`.

pub mod error;
pub mod evaluator;
pub mod issue;
pub mod reading;
pub mod rules;
