//! attune-bedrock
//!
//! Bedrock model invocation and narrative report parsing: prompt assembly,
//! a single-attempt Converse call, and the layered extraction of the model's
//! free-text reply into the four report sections.

pub mod client;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod sections;
