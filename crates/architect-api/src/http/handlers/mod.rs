//! HTTP request handlers for the REST API.

pub mod builds;
pub mod generate;
pub mod presets;
pub mod schema;
pub mod session;
