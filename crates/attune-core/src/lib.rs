//! attune-core
//!
//! Pure domain types for the assessment pipeline: the inbound submission,
//! the derived risk metrics, and the assembled narrative report.
//! No AWS dependency. This is the shared vocabulary of the Attune system.

pub mod models;
