//! Two-stage build generation.
//!
//! A structured build is requested first; its identity fields then drive the
//! illustration request. The stages are typed (`Pending` -> `TextReady` ->
//! `Build`) so the illustration cannot be requested without a validated build.

pub mod client;
pub mod prompt;

pub use client::{BuildGenerator, GenerationClient, Pending, TextReady};
