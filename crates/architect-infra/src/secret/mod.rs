//! Credential resolution for the remote generative service.

pub mod env;

pub use env::resolve_api_key;
