//! Generation engine for elfproef.
//!
//! This crate turns a generation request (mode + count) into 9-digit
//! candidates that either pass or deliberately fail the 11-test, plus a
//! run report and flat line-oriented output artifacts.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, Mode};
