//! Tracing setup and GenAI span attribute names for Woken Architect.

pub mod genai_attrs;
pub mod tracing_setup;
