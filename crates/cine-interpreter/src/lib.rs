//! Rule-based command interpretation.
//!
//! This crate turns a natural-language scene description into a fully
//! populated [`cine_models::ShotPlan`], and derives alternative-technique
//! recommendations from a plan. Interpretation is pure keyword and regex
//! matching: deterministic, total, and case-insensitive. Unmatched
//! categories fall back to documented defaults rather than failing.

pub mod interpreter;
pub mod recommend;
pub mod samples;
pub mod vocabulary;

pub use interpreter::interpret;
pub use recommend::recommend;
pub use samples::SAMPLE_COMMANDS;
