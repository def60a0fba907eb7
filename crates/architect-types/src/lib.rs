//! Shared domain types for Woken Architect.
//!
//! This crate contains the core domain types used across the workspace:
//! the character `Build` record and its nested records, the remote content
//! request/response shapes, global configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, schemars, thiserror.

pub mod build;
pub mod config;
pub mod error;
pub mod llm;
