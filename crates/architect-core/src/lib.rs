//! Business logic for Woken Architect.
//!
//! This crate defines the build schema and validator, the `GenerativeBackend`
//! port the infrastructure layer implements, the two-stage generation client,
//! and the presentation/session logic that drives the dashboard. It depends
//! only on `architect-types` -- never on `architect-infra` or any HTTP crate.

pub mod generation;
pub mod llm;
pub mod presentation;
pub mod schema;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
